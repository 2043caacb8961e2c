//! TUI rendering traits for celebration types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to celebration-core types using owo_colors.

use celebration_core::CelebrationEvent;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CelebrationEvent {
    fn render(&self) -> String {
        let date = format!("{:<12}", self.date.format("%B %-d"));
        format!(
            "{} {}\n{}",
            date.bold(),
            self.summary.magenta(),
            indent(&self.description).dimmed()
        )
    }
}

/// Render a list of events separated by blank lines
pub fn render_events(events: &[CelebrationEvent]) -> String {
    events
        .iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn indent(text: &str) -> String {
    format!("{:13}{}", "", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event() -> CelebrationEvent {
        CelebrationEvent {
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            summary: "Ava's Birthday Celebration".to_string(),
            description: "Today is your special day!".to_string(),
        }
    }

    #[test]
    fn test_render_event_includes_date_and_text() {
        let rendered = event().render();
        assert!(rendered.contains("March 15"));
        assert!(rendered.contains("Ava's Birthday Celebration"));
        assert!(rendered.contains("Today is your special day!"));
    }

    #[test]
    fn test_render_events_separates_entries() {
        let rendered = render_events(&[event(), event()]);
        assert_eq!(rendered.matches("March 15").count(), 2);
        assert!(rendered.contains("\n\n"));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 365), "events");
    }
}
