use envkit::{Config, DbConnection, TestSettings};
use std::path::Path;
use std::process::ExitCode;

use envkit_app::config;

#[tokio::main]
async fn main() -> ExitCode {
    envkit::logging::init();

    let env = Config::init(Path::new("."));
    config::register_all();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(environment = %env, "{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), envkit::ConfigError> {
    let profile = Config::database_profile()?;
    profile.validate()?;

    let conn = DbConnection::connect(&profile).await?;
    conn.ping().await?;

    println!("environment: {}", Config::environment());
    println!("client:      {}", profile.client);
    println!("database:    {}", profile.database_url());
    println!("migrations:  {}", profile.migrations_dir().display());
    println!("seeds:       {}", profile.seeds_dir().display());

    if let Some(settings) = Config::get::<TestSettings>() {
        settings.validate()?;
        println!("test timeout: {}ms", settings.test_timeout);
    }

    Ok(())
}
