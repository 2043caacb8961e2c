use std::path::Path;

use anyhow::Result;
use celebration_core::config::AppConfig;
use owo_colors::OwoColorize;

pub fn run(config_override: Option<&Path>) -> Result<()> {
    let (config_path, config) = match config_override {
        Some(path) => (path.to_path_buf(), AppConfig::load_from(path)?),
        None => (AppConfig::config_path()?, AppConfig::load()?),
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Output:     {}", config.output_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Preview:    {} {}", config.preview_count, crate::render::pluralize("event", config.preview_count));
    println!("  Delay:      {}ms", config.reveal_delay_ms);

    Ok(())
}
