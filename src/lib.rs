//! confdeck: a GTK4 editor for analysis-server installation settings
//!
//! This library provides the pieces behind the confdeck binary:
//! - Server version identifiers and the option-group partition they key
//! - The selection controller keeping each section's option groups
//!   consistent with its version selector
//! - GTK widgets for installation sections
//! - Installation file loading

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use config::{AppConfig, InstallationConfig};
pub use core::{ServerVersion, VersionGroup, VersionSelectionController};
