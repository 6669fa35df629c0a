use console::style;
use envkit::ConfigError;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), ConfigError> {
    let profile = ctx.profile()?;

    println!(
        "{} {}",
        style("Environment:").bold(),
        style(&ctx.environment).cyan()
    );
    println!("  client:             {}", profile.client);
    println!("  connection:         {}", profile.database_url());
    println!("  useNullAsDefault:   {}", profile.use_null_as_default);
    println!("  migrations:         {}", profile.migrations_dir().display());
    println!("  seeds:              {}", profile.seeds_dir().display());

    Ok(())
}
