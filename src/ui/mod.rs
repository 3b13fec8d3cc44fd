//! UI components

mod installation_editor;
mod installations_panel;

pub use installation_editor::InstallationEditor;
pub use installations_panel::InstallationsPanel;
