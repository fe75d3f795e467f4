//! Settings file deserialization.

use crate::config::ConfigError;
use crate::cutoff::parse_since;
use crate::owner::OwnerKind;
use serde::Deserialize;
use std::path::Path;

/// Defaults read from a TOML settings file. Every key is optional.
///
/// ```toml
/// owner = "acme"
/// owner-kind = "organization"
/// days = 14
/// limit = 200
/// include-archived = false
/// dry-run = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Account whose repositories are scanned.
    pub owner: Option<String>,

    /// Whether `owner` is a user or an organization.
    pub owner_kind: Option<OwnerKind>,

    /// Look-back window in days.
    pub days: Option<u32>,

    /// Explicit cutoff (RFC 3339 or `YYYY-MM-DD`); wins over `days`.
    pub since: Option<String>,

    /// Maximum number of repositories inspected.
    pub limit: Option<usize>,

    /// Whether archived repositories are eligible.
    pub include_archived: Option<bool>,

    /// Whether to skip the write calls.
    pub dry_run: Option<bool>,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML or fails validation.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;
        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates the parsed values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty owner, a zero limit
    /// or an unparsable `since`.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if self.owner.as_deref().is_some_and(|owner| owner.trim().is_empty()) {
            return Err(fail("owner must not be empty".to_string()));
        }
        if self.limit == Some(0) {
            return Err(fail("limit must be greater than zero".to_string()));
        }
        if let Some(since) = &self.since {
            parse_since(since).map_err(|e| fail(e.to_string()))?;
        }
        Ok(())
    }
}
