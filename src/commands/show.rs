use std::path::Path;

use anyhow::{Context, Result};
use celebration_core::ics::parse_calendar;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_events};

pub fn run(file: &Path, limit: Option<usize>) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let events = parse_calendar(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    if events.is_empty() {
        println!("{}", "No celebrations found".dimmed());
        return Ok(());
    }

    let shown = limit.unwrap_or(events.len()).min(events.len());
    println!("{}", render_events(&events[..shown]));

    if shown < events.len() {
        println!();
        let rest = events.len() - shown;
        println!("{}", format!("... and {} more {}", rest, pluralize("celebration", rest)).dimmed());
    }

    Ok(())
}
