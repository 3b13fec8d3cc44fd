//! Core types for confdeck

mod toggle;
mod version;

pub use toggle::{apply_version_rule, VersionSelectionController, VersionedSection};
pub use version::{ParseVersionError, ServerVersion, VersionGroup};
