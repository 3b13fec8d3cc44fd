//! Server version identifiers and the option-group partition keyed by them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unrecognized server version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized server version: {0}")]
pub struct ParseVersionError(pub String);

/// Recognized server versions.
///
/// Serialized as the plain reference version strings ("5.1", "5.2", "5.3")
/// so installation files stay stable across variant renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerVersion {
    /// 5.1 or lower: direct database access, login/password authentication
    #[serde(rename = "5.1")]
    V51OrLower,
    /// 5.2: no database access, login/password authentication
    #[serde(rename = "5.2")]
    V52,
    /// 5.3 or higher: token authentication
    #[serde(rename = "5.3")]
    V53OrHigher,
}

impl ServerVersion {
    /// All recognized versions, in selector order
    pub const ALL: [ServerVersion; 3] = [
        ServerVersion::V51OrLower,
        ServerVersion::V52,
        ServerVersion::V53OrHigher,
    ];

    /// The wire string for this version
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerVersion::V51OrLower => "5.1",
            ServerVersion::V52 => "5.2",
            ServerVersion::V53OrHigher => "5.3",
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            ServerVersion::V51OrLower => "5.1 or lower",
            ServerVersion::V52 => "5.2",
            ServerVersion::V53OrHigher => "5.3 or higher",
        }
    }

    /// The option group enabled when this version is selected
    pub fn group(&self) -> VersionGroup {
        match self {
            ServerVersion::V51OrLower => VersionGroup::V51,
            ServerVersion::V52 => VersionGroup::V52,
            ServerVersion::V53OrHigher => VersionGroup::V53,
        }
    }

    /// Fallback for installation entries written before the version field
    /// existed. Database credentials only made sense up to 5.1, a stored
    /// server password implies 5.2, anything newer authenticates with a
    /// token.
    pub fn infer(has_database_credentials: bool, has_server_password: bool) -> ServerVersion {
        if has_database_credentials {
            ServerVersion::V51OrLower
        } else if has_server_password {
            ServerVersion::V52
        } else {
            ServerVersion::V53OrHigher
        }
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5.1" => Ok(ServerVersion::V51OrLower),
            "5.2" => Ok(ServerVersion::V52),
            "5.3" => Ok(ServerVersion::V53OrHigher),
            other => Err(ParseVersionError(other.to_string())),
        }
    }
}

/// Mutually exclusive option-group tags, one per recognized version.
///
/// Every option checkbox in an installation section carries exactly one of
/// these; the section's version selector decides which group is sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionGroup {
    #[serde(rename = "51")]
    V51,
    #[serde(rename = "52")]
    V52,
    #[serde(rename = "53")]
    V53,
}

impl VersionGroup {
    /// Map a raw selector value to its group.
    ///
    /// Unrecognized values map to `None`; callers treat that as "leave the
    /// section untouched".
    pub fn for_value(value: &str) -> Option<VersionGroup> {
        value.parse::<ServerVersion>().ok().map(|v| v.group())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_round_trip() {
        for version in ServerVersion::ALL {
            let parsed: ServerVersion = version.as_str().parse().unwrap();
            assert_eq!(parsed, version);
        }
    }

    #[test]
    fn test_version_serialization() {
        let json = serde_json::to_string(&ServerVersion::V52).unwrap();
        assert_eq!(json, "\"5.2\"");

        let deserialized: ServerVersion = serde_json::from_str("\"5.3\"").unwrap();
        assert_eq!(deserialized, ServerVersion::V53OrHigher);
    }

    #[test]
    fn test_unknown_version_is_parse_error() {
        let err = "9.9".parse::<ServerVersion>().unwrap_err();
        assert_eq!(err, ParseVersionError("9.9".to_string()));
    }

    #[test]
    fn test_group_for_value() {
        assert_eq!(VersionGroup::for_value("5.1"), Some(VersionGroup::V51));
        assert_eq!(VersionGroup::for_value("5.2"), Some(VersionGroup::V52));
        assert_eq!(VersionGroup::for_value("5.3"), Some(VersionGroup::V53));
        assert_eq!(VersionGroup::for_value("9.9"), None);
        assert_eq!(VersionGroup::for_value(""), None);
    }

    #[test]
    fn test_infer_prefers_database_over_password() {
        assert_eq!(
            ServerVersion::infer(true, true),
            ServerVersion::V51OrLower
        );
        assert_eq!(ServerVersion::infer(false, true), ServerVersion::V52);
        assert_eq!(
            ServerVersion::infer(false, false),
            ServerVersion::V53OrHigher
        );
    }
}
