//! Application configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CelebrationError, CelebrationResult};
use crate::preview::PREVIEW_SIZE;

static DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_REVEAL_DELAY_MS: u64 = 1500;

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_preview_count() -> usize {
    PREVIEW_SIZE
}

fn default_reveal_delay_ms() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

/// Configuration at ~/.config/celebration/config.toml
///
/// Every key is optional. `CELEBRATE_*` environment variables override the
/// file (e.g. `CELEBRATE_OUTPUT_DIR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where generated .ics files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// How many events the preview shows
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,

    /// How long the spinner runs before results are shown
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_dir: default_output_dir(),
            preview_count: default_preview_count(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> CelebrationResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CelebrationError::Config("Could not determine config directory".into()))?
            .join("celebration");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// there on first use.
    pub fn load() -> CelebrationResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CelebrationResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("CELEBRATE").try_parsing(true))
            .build()
            .map_err(|e| CelebrationError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CelebrationError::Config(e.to_string()))
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CelebrationResult<()> {
        let contents = format!(
            "\
# Daily celebration calendar configuration

# Where generated calendars are saved:
# output_dir = \"{}\"

# Number of events shown in the preview:
# preview_count = {}

# Milliseconds of \"preparing your calendar\" before results appear:
# reveal_delay_ms = {}
",
            DEFAULT_OUTPUT_DIR, PREVIEW_SIZE, DEFAULT_REVEAL_DELAY_MS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CelebrationError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CelebrationError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.preview_count, 5);
        assert_eq!(config.reveal_delay_ms, 1500);
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        AppConfig::create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_dir = \"/tmp/cal\"\npreview_count = 3\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/cal"));
        assert_eq!(config.preview_count, 3);
        assert_eq!(config.reveal_delay_ms, 1500);
    }

    #[test]
    fn test_invalid_value_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "preview_count = \"lots\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CelebrationError::Config(_)));
    }

    #[test]
    fn test_output_path_expands_tilde() {
        let config = AppConfig {
            output_dir: PathBuf::from("~/calendars"),
            ..Default::default()
        };
        assert!(!config.output_path().to_string_lossy().starts_with('~'));
    }
}
