mod commands;

use clap::{Parser, Subcommand};
use console::style;
use envkit::database::ScriptKind;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::Context;

#[derive(Parser)]
#[command(name = "envkit")]
#[command(
    about = "Inspect environment profiles and manage migration/seed scripts",
    long_about = None
)]
struct Cli {
    /// Directory holding database.toml and testing.toml
    #[arg(long, global = true, default_value = "config")]
    config_dir: PathBuf,

    /// Environment to use (default: APP_ENV, then development)
    #[arg(long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active environment and its database profile
    Env,
    /// Load and validate both config files
    #[command(name = "config:check")]
    ConfigCheck,
    /// Show test-run settings after environment overrides
    #[command(name = "test:settings")]
    TestSettings,
    /// List migration scripts for the active environment
    #[command(name = "migrate:list")]
    MigrateList,
    /// List seed scripts for the active environment
    #[command(name = "seed:list")]
    SeedList,
    /// Create a new timestamped migration script
    #[command(name = "make:migration")]
    MakeMigration {
        /// Name of the migration (e.g., create_users_table)
        name: String,
    },
    /// Create a new seed script
    #[command(name = "make:seed")]
    MakeSeed {
        /// Name of the seed (e.g., users)
        name: String,
    },
}

fn main() -> ExitCode {
    envkit::logging::init();
    let cli = Cli::parse();
    let ctx = Context::new(cli.config_dir, cli.env);

    let result = match cli.command {
        Commands::Env => commands::env::run(&ctx),
        Commands::ConfigCheck => commands::check::run(&ctx),
        Commands::TestSettings => commands::test_settings::run(&ctx),
        Commands::MigrateList => commands::scripts::list(&ctx, ScriptKind::Migration),
        Commands::SeedList => commands::scripts::list(&ctx, ScriptKind::Seed),
        Commands::MakeMigration { name } => {
            commands::scripts::make(&ctx, ScriptKind::Migration, &name)
        }
        Commands::MakeSeed { name } => commands::scripts::make(&ctx, ScriptKind::Seed, &name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
