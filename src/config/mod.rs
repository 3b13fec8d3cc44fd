//! Configuration management

mod settings;

pub use settings::{default_options, AppConfig, InstallationConfig, OptionConfig};
