//! Version selection controller
//!
//! Keeps each installation section's option checkboxes consistent with its
//! version selector: the group matching the selected version is enabled,
//! the other groups are disabled. Sections subscribe to a shared controller
//! scoped to their container, so sections added after startup need no
//! extra wiring on the existing ones.

use log::debug;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::version::VersionGroup;

/// One installation section as seen by the selection controller.
///
/// The UI layer implements this over real widgets; tests implement it over
/// plain state.
pub trait VersionedSection {
    /// Current raw value of the section's version selector
    fn version_value(&self) -> String;

    /// Group tag of every option checkbox in the section, in widget order
    fn checkbox_groups(&self) -> Vec<VersionGroup>;

    /// Enable or disable the option checkbox at `index`
    fn set_checkbox_enabled(&self, index: usize, enabled: bool);
}

/// Apply the version rule to a single section.
///
/// A recognized value enables exactly the checkboxes of its group and
/// disables all others. An unrecognized value leaves the section untouched.
pub fn apply_version_rule(section: &dyn VersionedSection, value: &str) {
    let Some(group) = VersionGroup::for_value(value) else {
        debug!("Ignoring unrecognized server version {:?}", value);
        return;
    };

    for (index, checkbox_group) in section.checkbox_groups().into_iter().enumerate() {
        section.set_checkbox_enabled(index, checkbox_group == group);
    }
}

/// Controller that owns the subscription list for one container of sections
pub struct VersionSelectionController {
    sections: RefCell<Vec<Weak<dyn VersionedSection>>>,
}

impl VersionSelectionController {
    /// Create a controller with no attached sections
    pub fn new() -> Self {
        Self {
            sections: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a section.
    ///
    /// The controller holds a weak handle, so dropping the section
    /// elsewhere detaches it automatically.
    pub fn attach(&self, section: Rc<dyn VersionedSection>) {
        self.sections.borrow_mut().push(Rc::downgrade(&section));
    }

    /// Apply the version rule to every live attached section using its
    /// current selector value. Idempotent; dead handles are pruned.
    pub fn initialize(&self) {
        self.sections.borrow_mut().retain(|weak| match weak.upgrade() {
            Some(section) => {
                let value = section.version_value();
                apply_version_rule(section.as_ref(), &value);
                true
            }
            None => false,
        });
    }

    /// Apply the version rule to the section whose selector just changed.
    /// No other section is affected.
    pub fn on_version_change(&self, section: &dyn VersionedSection, value: &str) {
        apply_version_rule(section, value);
    }

    /// Number of live attached sections
    pub fn section_count(&self) -> usize {
        self.sections
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl Default for VersionSelectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::ServerVersion;

    /// Section backed by plain state. `enabled` keeps `None` for
    /// checkboxes never touched by the controller, so tests can tell
    /// "disabled" apart from "left alone".
    struct TestSection {
        value: RefCell<String>,
        groups: Vec<VersionGroup>,
        enabled: RefCell<Vec<Option<bool>>>,
    }

    impl TestSection {
        fn new(value: &str, groups: &[VersionGroup]) -> Rc<Self> {
            Rc::new(Self {
                value: RefCell::new(value.to_string()),
                groups: groups.to_vec(),
                enabled: RefCell::new(vec![None; groups.len()]),
            })
        }

        fn enabled_states(&self) -> Vec<Option<bool>> {
            self.enabled.borrow().clone()
        }
    }

    impl VersionedSection for TestSection {
        fn version_value(&self) -> String {
            self.value.borrow().clone()
        }

        fn checkbox_groups(&self) -> Vec<VersionGroup> {
            self.groups.clone()
        }

        fn set_checkbox_enabled(&self, index: usize, enabled: bool) {
            self.enabled.borrow_mut()[index] = Some(enabled);
        }
    }

    const ONE_PER_GROUP: [VersionGroup; 3] =
        [VersionGroup::V51, VersionGroup::V52, VersionGroup::V53];

    #[test]
    fn test_recognized_version_enables_exactly_its_group() {
        for version in ServerVersion::ALL {
            let section = TestSection::new("", &ONE_PER_GROUP);
            let controller = VersionSelectionController::new();

            controller.on_version_change(section.as_ref(), version.as_str());

            let expected: Vec<Option<bool>> = ONE_PER_GROUP
                .iter()
                .map(|g| Some(*g == version.group()))
                .collect();
            assert_eq!(section.enabled_states(), expected, "version {}", version);
        }
    }

    #[test]
    fn test_change_is_idempotent() {
        let section = TestSection::new("", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();

        controller.on_version_change(section.as_ref(), "5.2");
        let once = section.enabled_states();
        controller.on_version_change(section.as_ref(), "5.2");

        assert_eq!(section.enabled_states(), once);
    }

    #[test]
    fn test_unknown_value_leaves_section_untouched() {
        let section = TestSection::new("", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();

        controller.on_version_change(section.as_ref(), "5.1");
        let before = section.enabled_states();

        controller.on_version_change(section.as_ref(), "9.9");
        assert_eq!(section.enabled_states(), before);
    }

    #[test]
    fn test_unknown_value_on_fresh_section_is_noop() {
        let section = TestSection::new("9.9", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();
        controller.attach(section.clone());

        controller.initialize();

        assert_eq!(section.enabled_states(), vec![None, None, None]);
    }

    #[test]
    fn test_change_does_not_affect_other_sections() {
        let first = TestSection::new("5.1", &ONE_PER_GROUP);
        let second = TestSection::new("5.3", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();
        controller.attach(first.clone());
        controller.attach(second.clone());
        controller.initialize();

        let second_before = second.enabled_states();
        controller.on_version_change(first.as_ref(), "5.2");

        assert_eq!(second.enabled_states(), second_before);
        assert_eq!(
            first.enabled_states(),
            vec![Some(false), Some(true), Some(false)]
        );
    }

    #[test]
    fn test_initialize_applies_preset_values() {
        let section = TestSection::new("5.2", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();
        controller.attach(section.clone());

        controller.initialize();

        assert_eq!(
            section.enabled_states(),
            vec![Some(false), Some(true), Some(false)]
        );
    }

    #[test]
    fn test_initialize_covers_every_section() {
        let first = TestSection::new("5.1", &ONE_PER_GROUP);
        let second = TestSection::new("5.3", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();
        controller.attach(first.clone());
        controller.attach(second.clone());

        controller.initialize();

        assert_eq!(
            first.enabled_states(),
            vec![Some(true), Some(false), Some(false)]
        );
        assert_eq!(
            second.enabled_states(),
            vec![Some(false), Some(false), Some(true)]
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let section = TestSection::new("5.1", &ONE_PER_GROUP);
        let controller = VersionSelectionController::new();
        controller.attach(section.clone());

        controller.initialize();
        let once = section.enabled_states();
        controller.initialize();

        assert_eq!(section.enabled_states(), once);
    }

    #[test]
    fn test_shared_group_tags_toggle_together() {
        let groups = [
            VersionGroup::V51,
            VersionGroup::V51,
            VersionGroup::V52,
            VersionGroup::V53,
        ];
        let section = TestSection::new("", &groups);
        let controller = VersionSelectionController::new();

        controller.on_version_change(section.as_ref(), "5.1");

        assert_eq!(
            section.enabled_states(),
            vec![Some(true), Some(true), Some(false), Some(false)]
        );
    }

    #[test]
    fn test_dropped_sections_are_pruned() {
        let controller = VersionSelectionController::new();
        let kept = TestSection::new("5.1", &ONE_PER_GROUP);
        controller.attach(kept.clone());
        {
            let dropped = TestSection::new("5.2", &ONE_PER_GROUP);
            controller.attach(dropped.clone());
            assert_eq!(controller.section_count(), 2);
        }

        controller.initialize();
        assert_eq!(controller.section_count(), 1);
    }

    #[test]
    fn test_attach_after_initialize_joins_next_pass() {
        let controller = VersionSelectionController::new();
        let first = TestSection::new("5.1", &ONE_PER_GROUP);
        controller.attach(first.clone());
        controller.initialize();

        let late = TestSection::new("5.3", &ONE_PER_GROUP);
        controller.attach(late.clone());
        assert_eq!(late.enabled_states(), vec![None, None, None]);

        controller.initialize();
        assert_eq!(
            late.enabled_states(),
            vec![Some(false), Some(false), Some(true)]
        );
    }
}
