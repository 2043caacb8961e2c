use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use celebration_core::config::AppConfig;
use celebration_core::generate_events;
use celebration_core::ics::{ICS_MIME_TYPE, generate_calendar};
use celebration_core::preview::sample_preview;
use chrono::Utc;
use owo_colors::OwoColorize;
use tracing::info;

use super::{calendar_path, load_profile, resolve_year};
use crate::render::{pluralize, render_events};
use crate::utils::tui::{create_spinner, finish_after};

pub async fn run(
    config: &AppConfig,
    profile_path: &Path,
    year: Option<i32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let year = resolve_year(year);

    let spinner = create_spinner(format!("Preparing your {} celebrations...", year));
    let (preview, ics, count) = {
        let mut rng = rand::thread_rng();
        let events = generate_events(&profile, year, &mut rng)?;
        let preview = sample_preview(&events, config.preview_count, &mut rng);
        let ics = generate_calendar(&events, &profile.name, Utc::now(), &mut rng);
        info!(events = events.len(), year, "generated celebration calendar");
        (preview, ics, events.len())
    };
    finish_after(spinner, config.reveal_delay_ms).await;

    println!("{}", "Sneak peek".bold());
    println!();
    println!("{}", render_events(&preview));
    println!();

    let output_dir = output.unwrap_or_else(|| config.output_path());
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let path = calendar_path(&output_dir, &profile.name);
    std::fs::write(&path, &ics).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Saved {} {} to {} ({})",
        "✓".green(),
        count,
        pluralize("celebration", count),
        path.display(),
        ICS_MIME_TYPE.dimmed()
    );

    Ok(())
}
