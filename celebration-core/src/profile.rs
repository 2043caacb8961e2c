//! The personal facts a celebration calendar is built from.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CelebrationError, CelebrationResult};

/// User-supplied facts. Every field is an opaque string and an empty string
/// means "not provided".
///
/// `hobbies`, `achievements`, `dreams` and `personality` are comma-delimited
/// lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// `YYYY-MM-DD`, or empty when unknown
    pub birthday: String,
    pub height: String,
    pub weight: String,
    #[serde(alias = "favoriteColor")]
    pub favorite_color: String,
    #[serde(alias = "favoriteFood")]
    pub favorite_food: String,
    pub hobbies: String,
    pub achievements: String,
    pub dreams: String,
    pub personality: String,
}

impl Profile {
    /// Load a profile from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> CelebrationResult<Self> {
        let contents = std::fs::read_to_string(path)?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("toml");

        match format {
            "json" => serde_json::from_str(&contents).map_err(|e| {
                CelebrationError::Profile(format!("Failed to parse {}: {e}", path.display()))
            }),
            "toml" => toml::from_str(&contents).map_err(|e| {
                CelebrationError::Profile(format!("Failed to parse {}: {e}", path.display()))
            }),
            other => Err(CelebrationError::Profile(format!(
                "Unsupported profile format '.{other}' (expected .toml or .json)"
            ))),
        }
    }

    /// The birthday as a date.
    ///
    /// `None` when the field is empty or not a valid `YYYY-MM-DD` date.
    pub fn birthday_date(&self) -> Option<NaiveDate> {
        let raw = self.birthday.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn has_birthday(&self) -> bool {
        !self.birthday.is_empty()
    }
}
