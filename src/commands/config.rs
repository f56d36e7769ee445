use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::AppConfig;

pub fn run(cfg: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path()?;

    println!("{} {}", "Config:".dimmed(), path.display());
    println!();
    print!("{}", cfg.to_toml()?);

    Ok(())
}
