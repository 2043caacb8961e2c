use std::path::Path;

use anyhow::Result;
use celebration_core::config::AppConfig;
use celebration_core::generate_events;
use celebration_core::preview::sample_preview;

use super::{load_profile, resolve_year};
use crate::render::render_events;
use crate::utils::tui::{create_spinner, finish_after};

pub async fn run(
    config: &AppConfig,
    profile_path: &Path,
    year: Option<i32>,
    count: Option<usize>,
) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let year = resolve_year(year);
    let count = count.unwrap_or(config.preview_count);

    let spinner = create_spinner(format!("Preparing your {} celebrations...", year));
    let preview = {
        let mut rng = rand::thread_rng();
        let events = generate_events(&profile, year, &mut rng)?;
        sample_preview(&events, count, &mut rng)
    };
    finish_after(spinner, config.reveal_delay_ms).await;

    println!("{}", render_events(&preview));

    Ok(())
}
