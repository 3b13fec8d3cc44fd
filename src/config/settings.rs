//! Installation configuration
//!
//! Describes the installation sections the UI renders: one entry per
//! server installation, each with a preselected version and the option
//! checkboxes that belong to the three version groups. The file is input
//! only; form state is never written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{ServerVersion, VersionGroup};

/// Top-level configuration: the list of installations to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Installation sections
    pub installations: Vec<InstallationConfig>,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to the
    /// built-in demo installations when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.confdeck", "confdeck")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("installations.json"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            installations: vec![
                InstallationConfig::demo("Production", "https://analysis.example.com", "5.3"),
                InstallationConfig::demo("Staging", "http://localhost:9000", "5.1"),
            ],
        }
    }
}

/// One installation section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationConfig {
    /// Display name of the installation
    pub name: String,
    /// Server base URL, shown as a caption
    #[serde(default)]
    pub server_url: String,
    /// Preselected server version, kept as the raw selector value.
    /// Unrecognized values are legal and leave the section's groups in
    /// their constructed state until the user picks a version.
    #[serde(default)]
    pub server_version: Option<String>,
    /// Database URL from entries written before the version field existed
    #[serde(default)]
    pub database_url: String,
    /// Stored server password from such entries
    #[serde(default)]
    pub server_password: String,
    /// Option checkboxes, each tagged with its version group
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

impl InstallationConfig {
    /// Version to preselect in the section's selector.
    ///
    /// An explicit value wins even when unrecognized (`None` then, so the
    /// selector stays on the placeholder). A missing value falls back to
    /// inference from the legacy credential fields.
    pub fn resolved_version(&self) -> Option<ServerVersion> {
        match &self.server_version {
            Some(raw) => raw.parse().ok(),
            None => Some(ServerVersion::infer(
                !self.database_url.is_empty(),
                !self.server_password.is_empty(),
            )),
        }
    }

    /// A demo installation carrying the stock option set
    fn demo(name: &str, server_url: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            server_url: server_url.to_string(),
            server_version: Some(version.to_string()),
            database_url: String::new(),
            server_password: String::new(),
            options: default_options(),
        }
    }
}

/// One option checkbox inside an installation section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionConfig {
    /// Checkbox label
    pub label: String,
    /// Version group this option belongs to
    pub group: VersionGroup,
    /// Initial checked state
    #[serde(default)]
    pub checked: bool,
}

impl OptionConfig {
    pub fn new(label: &str, group: VersionGroup) -> Self {
        Self {
            label: label.to_string(),
            group,
            checked: false,
        }
    }
}

/// Stock option set for new installations, one block per version group
pub fn default_options() -> Vec<OptionConfig> {
    vec![
        OptionConfig::new("Connect directly to the analysis database", VersionGroup::V51),
        OptionConfig::new("Keep database credentials", VersionGroup::V51),
        OptionConfig::new("Sign in with server login and password", VersionGroup::V52),
        OptionConfig::new("Remember server password", VersionGroup::V52),
        OptionConfig::new("Authenticate with a server token", VersionGroup::V53),
    ]
}
