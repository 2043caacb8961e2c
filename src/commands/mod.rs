pub mod config;
pub mod generate;
pub mod preview;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use celebration_core::Profile;
use celebration_core::ics::calendar_filename;
use chrono::{Datelike, Local};

/// Load the profile file given on the command line
pub fn load_profile(path: &Path) -> Result<Profile> {
    Profile::load(path).with_context(|| format!("Failed to load profile from {}", path.display()))
}

/// Where the calendar for `owner_name` is saved inside `output_dir`.
///
/// Path separators and a leading `..` in the name become `_`, so the file
/// always lands directly in `output_dir`.
pub fn calendar_path(output_dir: &Path, owner_name: &str) -> PathBuf {
    let mut name = owner_name.replace(['/', '\\'], "_");
    if name.starts_with("..") {
        name.replace_range(..2, "_");
    }
    output_dir.join(calendar_filename(&name))
}

/// The year to generate: the explicit one, or the current local year
pub fn resolve_year(year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_year_prefers_explicit_year() {
        assert_eq!(resolve_year(Some(2030)), 2030);
        assert_eq!(resolve_year(None), Local::now().year());
    }

    #[test]
    fn test_calendar_path_stays_in_output_dir() {
        let dir = Path::new("/srv/calendars");

        for name in ["Ava", "../../etc/evil", "..", "a/b", "..\\windows\\evil", "/abs"] {
            let path = calendar_path(dir, name);
            assert_eq!(path.parent(), Some(dir), "name {:?} gave {}", name, path.display());
            assert!(
                !path
                    .components()
                    .any(|c| matches!(c, std::path::Component::ParentDir)),
                "name {:?} gave {}",
                name,
                path.display()
            );
        }
    }

    #[test]
    fn test_calendar_path_keeps_plain_names() {
        assert_eq!(
            calendar_path(Path::new("out"), "Ava"),
            Path::new("out").join("Ava_celebration_calendar.ics")
        );
        assert_eq!(
            calendar_path(Path::new("out"), "../../etc/evil"),
            Path::new("out").join("__.._etc_evil_celebration_calendar.ics")
        );
    }

    #[test]
    fn test_load_profile_reports_path() {
        let err = load_profile(Path::new("/nonexistent/ava.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/ava.toml"));
    }
}
