use console::style;
use envkit::{paths, ConfigError};

use super::Context;

/// Validate both files; missing script directories only warn
pub fn run(ctx: &Context) -> Result<(), ConfigError> {
    let environments = ctx.environments()?;
    environments.validate()?;
    println!(
        "{} {} ({} environments)",
        style("✓").green(),
        ctx.database_path().display(),
        environments.len()
    );

    for (name, profile) in environments.iter() {
        for dir in [profile.migrations_dir(), profile.seeds_dir()] {
            if paths::is_cwd_relative(dir) {
                tracing::debug!(
                    environment = name,
                    dir = %dir.display(),
                    "resolving against working directory"
                );
            }
            if !dir.is_dir() {
                tracing::warn!(
                    environment = name,
                    dir = %dir.display(),
                    "script directory missing"
                );
                println!(
                    "{} {}: directory {} does not exist",
                    style("!").yellow(),
                    name,
                    dir.display()
                );
            }
        }
    }

    let settings = ctx.test_settings()?;
    settings.validate()?;
    println!("{} {}", style("✓").green(), ctx.testing_path().display());

    environments.profile(&ctx.environment)?;
    println!(
        "{} active environment {}",
        style("✓").green(),
        style(&ctx.environment).cyan()
    );

    Ok(())
}
