//! Container for installation sections
//!
//! Owns the shared selection controller. Every editor added to the panel,
//! at startup or later, is subscribed here, so selector changes anywhere
//! in the container reach the controller without per-editor re-binding.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation, Separator};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AppConfig, InstallationConfig};
use crate::core::{VersionSelectionController, VersionedSection};
use crate::ui::InstallationEditor;

/// Panel listing one editor per configured installation
pub struct InstallationsPanel {
    widget: GtkBox,
    controller: Rc<VersionSelectionController>,
    editors: RefCell<Vec<Rc<InstallationEditor>>>,
}

impl InstallationsPanel {
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 12);
        widget.set_margin_start(12);
        widget.set_margin_end(12);
        widget.set_margin_top(12);
        widget.set_margin_bottom(12);

        Self {
            widget,
            controller: Rc::new(VersionSelectionController::new()),
            editors: RefCell::new(Vec::new()),
        }
    }

    /// Build a panel with one editor per configured installation.
    ///
    /// The caller runs `initialize()` once the surrounding UI is attached.
    pub fn from_config(config: &AppConfig) -> Self {
        let panel = Self::new();
        for installation in &config.installations {
            panel.add_installation(installation);
        }
        info!("Built {} installation sections", config.installations.len());
        panel
    }

    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Append an editor for `config` and subscribe it to the shared
    /// controller. Works before and after `initialize()`.
    pub fn add_installation(&self, config: &InstallationConfig) -> Rc<InstallationEditor> {
        if !self.editors.borrow().is_empty() {
            self.widget.append(&Separator::new(Orientation::Horizontal));
        }

        let editor = Rc::new(InstallationEditor::new(config));
        self.widget.append(editor.widget());

        let controller = self.controller.clone();
        let weak = Rc::downgrade(&editor);
        editor.connect_version_changed(move |value| {
            if let Some(editor) = weak.upgrade() {
                controller.on_version_change(editor.as_ref(), value);
            }
        });

        self.controller.attach(editor.clone());
        self.editors.borrow_mut().push(editor.clone());
        editor
    }

    /// Evaluate the version rule for every section using its current
    /// selector value. Safe to call more than once.
    pub fn initialize(&self) {
        self.controller.initialize();
    }

    /// Apply the version rule to one editor using its current selector
    /// value, without touching the other sections. Used right after a
    /// dynamic `add_installation`.
    pub fn refresh(&self, editor: &InstallationEditor) {
        self.controller
            .on_version_change(editor, &editor.version_value());
    }

    /// Number of sections currently shown
    pub fn section_count(&self) -> usize {
        self.editors.borrow().len()
    }
}

impl Default for InstallationsPanel {
    fn default() -> Self {
        Self::new()
    }
}
