//! Owner kinds.

use super::ParseOwnerKindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of account that owns the scanned repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// An individual account.
    User,
    /// An organization account.
    #[serde(alias = "org")]
    Organization,
}

impl OwnerKind {
    /// Maps the `type` field of a GitHub account to an owner kind.
    ///
    /// Only `Organization` maps to [`OwnerKind::Organization`]; users, bots and
    /// anything unrecognised are listed as users.
    #[must_use]
    pub fn from_account_type(account_type: &str) -> Self {
        if account_type.eq_ignore_ascii_case("organization") {
            Self::Organization
        } else {
            Self::User
        }
    }

    /// Returns the kind as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerKind {
    type Err = ParseOwnerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "org" | "organization" => Ok(Self::Organization),
            _ => Err(ParseOwnerKindError {
                value: s.to_string(),
            }),
        }
    }
}
