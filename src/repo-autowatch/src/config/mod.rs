//! Settings file loading.
//!
//! A settings file supplies defaults for a run. Command line flags override
//! anything read here.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use std::path::Path;
use tracing::info;

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "REPO_AUTOWATCH_CONFIG";

/// Loads and validates a settings file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file does not exist, or another
/// [`ConfigError`] if it cannot be read, parsed or validated.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    info!(path = %path.display(), "Loading settings");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    Settings::parse(&contents, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::OwnerKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_settings(temp: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = temp.path().join("autowatch.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn can_load_settings() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            &temp,
            r#"
owner = "acme"
owner-kind = "org"
days = 14
limit = 200
include-archived = true
dry-run = true
"#,
        );

        let settings = load_settings(&path).unwrap();

        assert_eq!(settings.owner.as_deref(), Some("acme"));
        assert_eq!(settings.owner_kind, Some(OwnerKind::Organization));
        assert_eq!(settings.days, Some(14));
        assert_eq!(settings.limit, Some(200));
        assert_eq!(settings.include_archived, Some(true));
        assert_eq!(settings.dry_run, Some(true));
        assert_eq!(settings.since, None);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "");

        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn load_settings_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_settings(&temp.path().join("nonexistent.toml"));

        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "concurrency = 5\n");

        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::TomlError { .. })
        ));
    }

    #[test]
    fn rejects_zero_limit() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "limit = 0\n");

        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_invalid_since() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "since = \"yesterday\"\n");

        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_blank_owner() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "owner = \"  \"\n");

        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
