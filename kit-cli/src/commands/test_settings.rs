use console::style;
use envkit::ConfigError;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), ConfigError> {
    let settings = ctx.test_settings()?;
    settings.validate()?;

    let reporters: Vec<&str> = settings.reporters.iter().map(|r| r.as_str()).collect();

    println!("{}", style("Test settings:").bold());
    println!("  reporters:   {}", reporters.join(", "));
    println!("  outputFile:  {}", settings.output_file.display());
    println!("  watch:       {}", settings.watch);
    println!("  testTimeout: {}ms", settings.test_timeout);

    Ok(())
}
