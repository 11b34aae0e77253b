use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::CliConfig;

pub fn run(init: bool) -> Result<()> {
    let config_path = CliConfig::config_path()?;

    if init {
        if CliConfig::create_default_config(&config_path)? {
            println!("Created {}", config_path.display());
        } else {
            println!("{}", "Config file already exists".dimmed());
        }
    }

    let config = CliConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Exports:    {}", config.output_path().display());
    println!();
    println!("{}", "Values".bold());
    println!("  Calendar name:  {}", config.calendar_name);

    Ok(())
}
