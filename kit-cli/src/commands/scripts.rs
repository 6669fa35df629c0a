use chrono::Local;
use console::style;
use envkit::database::{scripts, ScriptKind};
use envkit::ConfigError;
use std::path::Path;

use super::Context;

fn directory<'a>(profile: &'a envkit::EnvironmentProfile, kind: ScriptKind) -> &'a Path {
    match kind {
        ScriptKind::Migration => profile.migrations_dir(),
        ScriptKind::Seed => profile.seeds_dir(),
    }
}

pub fn list(ctx: &Context, kind: ScriptKind) -> Result<(), ConfigError> {
    let profile = ctx.profile()?;
    let dir = directory(&profile, kind);
    let found = scripts::list(dir)?;

    if found.is_empty() {
        println!(
            "{}",
            style(format!("No {} scripts in {}", kind.label(), dir.display())).dim()
        );
        return Ok(());
    }

    println!(
        "{} {} script(s) in {}",
        style("->").cyan(),
        found.len(),
        dir.display()
    );
    for script in found {
        println!("  {}", script.name);
    }
    Ok(())
}

pub fn make(ctx: &Context, kind: ScriptKind, name: &str) -> Result<(), ConfigError> {
    let profile = ctx.profile()?;
    let dir = directory(&profile, kind);
    let path = scripts::make(dir, kind, name, Local::now().naive_local())?;

    println!("{} Created {}", style("✓").green(), path.display());
    Ok(())
}
