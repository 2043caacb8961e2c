//! Celebration ideas and the dated events built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A themed celebration, not yet tied to a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationIdea {
    pub summary: String,
    pub description: String,
}

impl CelebrationIdea {
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        CelebrationIdea {
            summary: summary.into(),
            description: description.into(),
        }
    }

    /// Generic idea used when nothing more personal is available for a day.
    ///
    /// `day_of_year` is zero-based.
    pub fn generic(day_of_year: u32) -> Self {
        CelebrationIdea::new(
            "Your Special Day",
            format!(
                "Today is day {} of the year, and it's special because you're in it!",
                day_of_year + 1
            ),
        )
    }

    pub fn on(self, date: NaiveDate) -> CelebrationEvent {
        CelebrationEvent {
            date,
            summary: self.summary,
            description: self.description,
        }
    }
}

/// An all-day celebration on a specific date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationEvent {
    pub date: NaiveDate,
    pub summary: String,
    pub description: String,
}

impl fmt::Display for CelebrationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}
