//! Editor widget for one server installation
//!
//! Renders the section's version selector and its grouped option
//! checkboxes. The editor only reports selector changes; applying the
//! enable/disable rule is the controller's job.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, CheckButton, DropDown, Label, Orientation, StringList};

use crate::config::InstallationConfig;
use crate::core::{ServerVersion, VersionGroup, VersionedSection};

/// Selector entry shown before any recognized version is chosen.
/// Its value maps to no group, so the section stays untouched.
const VERSION_PLACEHOLDER: &str = "(select version)";

/// Widget for one installation section
pub struct InstallationEditor {
    widget: GtkBox,
    version_combo: DropDown,
    checkboxes: Vec<(VersionGroup, CheckButton)>,
}

impl InstallationEditor {
    pub fn new(config: &InstallationConfig) -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 6);
        widget.set_margin_start(12);
        widget.set_margin_end(12);
        widget.set_margin_top(12);
        widget.set_margin_bottom(12);
        widget.add_css_class("card");

        let name_label = Label::new(Some(&config.name));
        name_label.set_halign(gtk4::Align::Start);
        name_label.add_css_class("heading");
        widget.append(&name_label);

        if !config.server_url.is_empty() {
            let url_label = Label::new(Some(&config.server_url));
            url_label.set_halign(gtk4::Align::Start);
            url_label.add_css_class("dim-label");
            widget.append(&url_label);
        }

        // Version selection
        let version_box = GtkBox::new(Orientation::Horizontal, 6);
        version_box.append(&Label::new(Some("Server Version:")));

        let mut version_labels = vec![VERSION_PLACEHOLDER];
        version_labels.extend(ServerVersion::ALL.iter().map(|v| v.label()));

        let version_options = StringList::new(&version_labels);
        let version_combo = DropDown::new(Some(version_options), Option::<gtk4::Expression>::None);
        version_combo.set_hexpand(true);

        match config.resolved_version() {
            Some(version) => {
                let index = ServerVersion::ALL.iter().position(|v| *v == version);
                version_combo.set_selected(index.map_or(0, |i| i as u32 + 1));
            }
            None => version_combo.set_selected(0),
        }

        version_box.append(&version_combo);
        widget.append(&version_box);

        // Option checkboxes, tagged with their version group
        let mut checkboxes = Vec::with_capacity(config.options.len());
        for option in &config.options {
            let check = CheckButton::with_label(&option.label);
            check.set_active(option.checked);
            widget.append(&check);
            checkboxes.push((option.group, check));
        }

        Self {
            widget,
            version_combo,
            checkboxes,
        }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Install the selector-change callback. Invoked with the new raw
    /// value on every selection change.
    pub fn connect_version_changed<F: Fn(&str) + 'static>(&self, callback: F) {
        self.version_combo.connect_selected_notify(move |combo| {
            callback(&selector_value(combo.selected()));
        });
    }
}

impl VersionedSection for InstallationEditor {
    fn version_value(&self) -> String {
        selector_value(self.version_combo.selected())
    }

    fn checkbox_groups(&self) -> Vec<VersionGroup> {
        self.checkboxes.iter().map(|(group, _)| *group).collect()
    }

    fn set_checkbox_enabled(&self, index: usize, enabled: bool) {
        if let Some((_, check)) = self.checkboxes.get(index) {
            check.set_sensitive(enabled);
        }
    }
}

/// Raw selector value for a dropdown position. Position 0 is the
/// placeholder, whose empty value maps to no group.
fn selector_value(selected: u32) -> String {
    ServerVersion::ALL
        .get(selected.wrapping_sub(1) as usize)
        .map(|v| v.as_str().to_string())
        .unwrap_or_default()
}
