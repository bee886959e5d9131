//! Setup-time controller: configuration, the region collection, and session
//! orchestration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modes::ModeRegistry;
use crate::region::{Region, RegionId};
use crate::session::EditSession;
use crate::surface::{DialogSlot, EditEvent, EditResult, Surface, SurfacePlacement};

/// Save callback: caller key, encoded value, and the already-updated region.
pub type SaveCallback = Box<dyn FnMut(&str, &str, &Region)>;

/// Setup failures.
///
/// Setup fails loudly instead of defaulting: a configuration the registry
/// cannot satisfy never reaches interaction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("unknown edit mode `{0}`")]
    UnknownMode(String),
    #[error("edit mode `{0}` requires an option list")]
    MissingOptions(&'static str),
}

/// Configuration bag applied to a collection of regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableConfig {
    /// Registry key of the edit mode.
    pub mode: String,
    /// Choices for the inline select mode; ignored by other modes.
    pub options: Option<Vec<String>>,
    /// Confirm action label.
    pub confirm_label: String,
    /// Cancel action label.
    pub cancel_label: String,
    /// Label of the per-region edit affordance.
    pub affordance_label: String,
}

impl Default for EditableConfig {
    fn default() -> Self {
        Self {
            mode: "text".to_string(),
            options: None,
            confirm_label: "Save".to_string(),
            cancel_label: "Cancel".to_string(),
            affordance_label: "Edit".to_string(),
        }
    }
}

impl EditableConfig {
    /// Create a configuration for the given mode with default labels.
    pub fn for_mode(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            ..Self::default()
        }
    }
}

/// A collection of editable regions sharing one configuration, one mode,
/// and one dialog surface.
///
/// All gestures flow through [`activate`] and [`handle_event`]; the
/// controller guarantees exactly one commit or rollback per session and one
/// open session per region.
///
/// [`activate`]: Editable::activate
/// [`handle_event`]: Editable::handle_event
pub struct Editable {
    config: EditableConfig,
    registry: ModeRegistry,
    regions: HashMap<RegionId, Region>,
    /// Insertion order of regions.
    order: Vec<RegionId>,
    sessions: HashMap<RegionId, EditSession>,
    dialog: DialogSlot,
    save: SaveCallback,
}

impl Editable {
    /// Set up with the built-in modes.
    ///
    /// Fails on an unknown mode name or a missing option list before any
    /// region exists.
    pub fn new(config: EditableConfig, save: SaveCallback) -> Result<Self, SetupError> {
        Self::with_registry(ModeRegistry::with_builtin_modes(), config, save)
    }

    /// Set up with a caller-supplied registry (for custom mode handlers).
    pub fn with_registry(
        registry: ModeRegistry,
        config: EditableConfig,
        save: SaveCallback,
    ) -> Result<Self, SetupError> {
        {
            let handler = registry.resolve(&config.mode)?;
            let has_options = config.options.as_ref().is_some_and(|o| !o.is_empty());
            if handler.requires_options() && !has_options {
                return Err(SetupError::MissingOptions(handler.name()));
            }
        }
        Ok(Self {
            config,
            registry,
            regions: HashMap::new(),
            order: Vec::new(),
            sessions: HashMap::new(),
            dialog: DialogSlot::new(),
            save,
        })
    }

    /// Add a region, attaching its edit affordance.
    pub fn add_region(&mut self, key: impl Into<String>, value: impl Into<String>) -> RegionId {
        let region = Region::new(key.into(), value.into());
        let id = region.id();
        self.regions.insert(id, region);
        self.order.push(id);
        id
    }

    /// Begin an edit session on a region.
    ///
    /// Returns `false` without touching anything when the region is unknown
    /// or already has an open session: the affordance is hidden while a
    /// session is open, so a second activation is a forced call and stays a
    /// no-op.
    pub fn activate(&mut self, id: RegionId) -> bool {
        if !self.regions.contains_key(&id) {
            log::warn!("activate on unknown region {id}");
            return false;
        }
        if self.sessions.contains_key(&id) {
            log::debug!("region {id} already has an open session");
            return false;
        }

        let (control, placement, width) = {
            let Ok(handler) = self.registry.resolve(&self.config.mode) else {
                // Setup validated the mode; a failure here means the
                // registry was swapped out from under us.
                return false;
            };
            let Some(region) = self.regions.get(&id) else {
                return false;
            };
            (
                handler.begin(region, &self.config),
                handler.placement(),
                handler.dialog_width(),
            )
        };

        if placement == SurfacePlacement::Dialog {
            if let Some(evicted) = self.dialog.acquire(id) {
                log::warn!("dialog surface still held by region {evicted}; rolling back");
                self.rollback(evicted);
            }
        }

        let surface = Surface {
            placement,
            control,
            confirm_label: self.config.confirm_label.clone(),
            cancel_label: self.config.cancel_label.clone(),
            dialog_width: width,
        };
        let Some(region) = self.regions.get_mut(&id) else {
            return false;
        };
        let session = EditSession::begin(region, surface);
        self.sessions.insert(id, session);
        log::debug!("began `{}` edit on region {id}", self.config.mode);
        true
    }

    /// Feed one gesture into the region's open session.
    ///
    /// A `Committed` result means the region value was re-encoded and
    /// updated and the save callback ran exactly once. The update is
    /// optimistic: the display value changes before the callback runs, and
    /// a callback failure propagates without rolling the region back.
    pub fn handle_event(&mut self, id: RegionId, event: EditEvent) -> EditResult {
        let Some(session) = self.sessions.get_mut(&id) else {
            log::debug!("event for region {id} without an open session");
            return EditResult::NotHandled;
        };
        match session.apply(event) {
            EditResult::Committed => {
                self.commit(id);
                EditResult::Committed
            }
            EditResult::RolledBack => {
                self.rollback(id);
                EditResult::RolledBack
            }
            other => other,
        }
    }

    /// Finish a committed session: encode, update the region, notify.
    fn commit(&mut self, id: RegionId) {
        let Some(session) = self.sessions.remove(&id) else {
            return;
        };
        let Ok(handler) = self.registry.resolve(&self.config.mode) else {
            return;
        };
        let encoded = handler.encode(&session.surface().control);
        self.dialog.release(id);
        if let Some(region) = self.regions.get_mut(&id) {
            region.set_value(encoded.clone());
            region.set_affordance_visible(true);
        }
        if let Some(region) = self.regions.get(&id) {
            log::debug!("committed region {id} ({} bytes)", encoded.len());
            (self.save)(&region.key, &encoded, region);
        }
    }

    /// Finish a cancelled session: discard drafts, restore the display.
    fn rollback(&mut self, id: RegionId) {
        if self.sessions.remove(&id).is_none() {
            return;
        }
        self.dialog.release(id);
        if let Some(region) = self.regions.get_mut(&id) {
            region.set_affordance_visible(true);
        }
        log::debug!("rolled back region {id}");
    }

    /// Get a region by id.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    /// Iterate regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.order.iter().filter_map(|id| self.regions.get(id))
    }

    /// Region ids in insertion order.
    pub fn region_ids(&self) -> &[RegionId] {
        &self.order
    }

    /// The open session on a region, if any.
    pub fn session(&self, id: RegionId) -> Option<&EditSession> {
        self.sessions.get(&id)
    }

    /// Whether a region has an open session.
    pub fn is_editing(&self, id: RegionId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// The region whose session currently holds the shared dialog.
    pub fn dialog_owner(&self) -> Option<RegionId> {
        self.dialog.owner()
    }

    /// The setup configuration.
    pub fn config(&self) -> &EditableConfig {
        &self.config
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection has no regions.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(String, String, String)>>>;

    /// A save callback that records (key, value, region value at call time).
    fn recording() -> (Calls, SaveCallback) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let save: SaveCallback = Box::new(move |key, value, region| {
            sink.borrow_mut()
                .push((key.to_string(), value.to_string(), region.value().to_string()));
        });
        (calls, save)
    }

    fn setup(config: EditableConfig) -> (Editable, Calls) {
        let (calls, save) = recording();
        let editable = Editable::new(config, save).expect("setup");
        (editable, calls)
    }

    /// (mode, initial value, extra config options) for every built-in mode.
    fn all_modes() -> Vec<(&'static str, &'static str, Option<Vec<String>>)> {
        let choices = Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
        vec![
            ("text", "plain", None),
            ("inline-text", "plain", None),
            ("textarea", "one<br />two", None),
            ("rich-text", "<p>rich</p>", None),
            ("inline-select", "A", choices),
            ("list", "<li>a</li><li>b</li>", None),
            ("option-list", "<option>a</option>", None),
        ]
    }

    #[test]
    fn test_rollback_preserves_value_for_all_modes() {
        for (mode, value, options) in all_modes() {
            let config = EditableConfig {
                options,
                ..EditableConfig::for_mode(mode)
            };
            let (mut editable, calls) = setup(config);
            let id = editable.add_region("key", value);

            assert!(editable.activate(id), "{mode}: activate");
            assert!(!editable.region(id).expect("region").affordance_visible());

            assert_eq!(
                editable.handle_event(id, EditEvent::Cancel),
                EditResult::RolledBack,
                "{mode}: cancel"
            );
            let region = editable.region(id).expect("region");
            assert_eq!(region.value(), value, "{mode}: value untouched");
            assert!(region.affordance_visible(), "{mode}: affordance restored");
            assert!(calls.borrow().is_empty(), "{mode}: no save on rollback");
            assert!(!editable.is_editing(id));
        }
    }

    #[test]
    fn test_commit_calls_save_once_with_encoded_value() {
        // (mode, initial, edit gestures, expected encoded value)
        let cases: Vec<(&str, &str, Vec<EditEvent>, &str)> = vec![
            (
                "text",
                "old",
                vec![
                    EditEvent::InputChanged("new".to_string()),
                    EditEvent::Confirm,
                ],
                "new",
            ),
            (
                "inline-text",
                "old",
                vec![
                    EditEvent::InputChanged("renamed".to_string()),
                    EditEvent::Confirm,
                ],
                "renamed",
            ),
            (
                "textarea",
                "one<br />two",
                vec![
                    EditEvent::InputChanged("x\ny".to_string()),
                    EditEvent::Confirm,
                ],
                "x<br />y",
            ),
            (
                "rich-text",
                "<p>old</p>",
                vec![
                    EditEvent::InputChanged("<b>new</b>".to_string()),
                    EditEvent::Confirm,
                ],
                "<b>new</b>",
            ),
            (
                "list",
                "<li>a</li>",
                vec![
                    EditEvent::PendingChanged("b".to_string()),
                    EditEvent::AppendItem,
                    EditEvent::Confirm,
                ],
                "<li>a</li><li>b</li>",
            ),
            (
                "option-list",
                "<option>a</option>",
                vec![
                    EditEvent::PendingChanged("b".to_string()),
                    EditEvent::AppendItem,
                    EditEvent::Confirm,
                ],
                "<option>a</option><option>b</option>",
            ),
        ];

        for (mode, initial, events, expected) in cases {
            let (mut editable, calls) = setup(EditableConfig::for_mode(mode));
            let id = editable.add_region("story-7", initial);
            assert!(editable.activate(id), "{mode}: activate");

            let mut last = EditResult::NotHandled;
            for event in events {
                last = editable.handle_event(id, event);
            }
            assert_eq!(last, EditResult::Committed, "{mode}: committed");

            let calls = calls.borrow();
            assert_eq!(calls.len(), 1, "{mode}: exactly one save");
            let (key, value, region_value) = &calls[0];
            assert_eq!(key, "story-7", "{mode}: caller key");
            assert_eq!(value, expected, "{mode}: encoded value");
            // Optimistic update: the region already shows the new value
            // when the callback runs.
            assert_eq!(region_value, expected, "{mode}: region updated first");

            let region = editable.region(id).expect("region");
            assert_eq!(region.value(), expected);
            assert!(region.affordance_visible());
        }
    }

    #[test]
    fn test_choice_commits_immediately_and_restores_display() {
        let config = EditableConfig {
            options: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            ..EditableConfig::for_mode("inline-select")
        };
        let (mut editable, calls) = setup(config);
        let id = editable.add_region("color", "A");
        assert!(editable.activate(id));

        // No confirm gesture: the choice alone terminates the session.
        assert_eq!(
            editable.handle_event(id, EditEvent::Choose(1)),
            EditResult::Committed
        );
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].1, "B");

        let region = editable.region(id).expect("region");
        assert_eq!(region.value(), "B");
        assert!(region.affordance_visible());
        assert!(!editable.is_editing(id));
    }

    #[test]
    fn test_list_append_then_delete_restores_serialized_form() {
        let (mut editable, calls) = setup(EditableConfig::for_mode("list"));
        let id = editable.add_region("tags", "<li>a</li><li>b</li>");
        assert!(editable.activate(id));

        // Empty append changes nothing.
        editable.handle_event(id, EditEvent::AppendItem);
        // Append "x" then delete it again.
        editable.handle_event(id, EditEvent::PendingChanged("x".to_string()));
        editable.handle_event(id, EditEvent::AppendItem);
        editable.handle_event(id, EditEvent::RemoveItem(2));
        assert_eq!(
            editable.handle_event(id, EditEvent::Confirm),
            EditResult::Committed
        );

        let (_, value, _) = calls.borrow()[0].clone();
        assert_eq!(value, "<li>a</li><li>b</li>");
        // No delete-affordance markup in the committed form.
        assert!(!value.contains("span"));
        assert!(!value.contains("class"));
    }

    #[test]
    fn test_list_reorder_commits_final_order() {
        let (mut editable, calls) = setup(EditableConfig::for_mode("list"));
        let id = editable.add_region("steps", "<li>a</li><li>b</li><li>c</li>");
        assert!(editable.activate(id));
        editable.handle_event(id, EditEvent::MoveItem { from: 2, to: 0 });
        editable.handle_event(id, EditEvent::Confirm);
        assert_eq!(calls.borrow()[0].1, "<li>c</li><li>a</li><li>b</li>");
    }

    #[test]
    fn test_second_activation_is_a_no_op() {
        let (mut editable, _calls) = setup(EditableConfig::for_mode("text"));
        let id = editable.add_region("k", "v");

        assert!(editable.activate(id));
        let surface_before = editable.session(id).expect("session").surface().clone();

        assert!(!editable.activate(id), "second activation refused");
        assert!(!editable.region(id).expect("region").affordance_visible());
        // Still the same single session and surface.
        assert_eq!(
            editable.session(id).expect("session").surface(),
            &surface_before
        );
    }

    #[test]
    fn test_unknown_mode_fails_setup() {
        let (_, save) = recording();
        let err = Editable::new(EditableConfig::for_mode("telepathy"), save).unwrap_err();
        assert_eq!(err, SetupError::UnknownMode("telepathy".to_string()));
    }

    #[test]
    fn test_select_without_options_fails_setup() {
        let (_, save) = recording();
        let err = Editable::new(EditableConfig::for_mode("inline-select"), save).unwrap_err();
        assert_eq!(err, SetupError::MissingOptions("inline-select"));

        let (_, save) = recording();
        let config = EditableConfig {
            options: Some(Vec::new()),
            ..EditableConfig::for_mode("inline-select")
        };
        assert!(Editable::new(config, save).is_err());
    }

    #[test]
    fn test_commit_with_empty_value_is_permitted() {
        let (mut editable, calls) = setup(EditableConfig::for_mode("text"));
        let id = editable.add_region("k", "something");
        editable.activate(id);
        editable.handle_event(id, EditEvent::InputChanged(String::new()));
        assert_eq!(
            editable.handle_event(id, EditEvent::Confirm),
            EditResult::Committed
        );
        assert_eq!(calls.borrow()[0].1, "");
        assert_eq!(editable.region(id).expect("region").value(), "");
    }

    #[test]
    fn test_event_without_session_not_handled() {
        let (mut editable, calls) = setup(EditableConfig::for_mode("text"));
        let id = editable.add_region("k", "v");
        assert_eq!(
            editable.handle_event(id, EditEvent::Confirm),
            EditResult::NotHandled
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_dialog_slot_tracks_owner() {
        let (mut editable, _calls) = setup(EditableConfig::for_mode("text"));
        let id = editable.add_region("k", "v");
        assert_eq!(editable.dialog_owner(), None);
        editable.activate(id);
        assert_eq!(editable.dialog_owner(), Some(id));
        editable.handle_event(id, EditEvent::Cancel);
        assert_eq!(editable.dialog_owner(), None);
    }

    #[test]
    fn test_inline_mode_leaves_dialog_free() {
        let (mut editable, _calls) = setup(EditableConfig::for_mode("inline-text"));
        let id = editable.add_region("k", "v");
        editable.activate(id);
        assert_eq!(editable.dialog_owner(), None);
    }

    #[test]
    fn test_forced_dialog_acquisition_rolls_back_prior_session() {
        let (mut editable, calls) = setup(EditableConfig::for_mode("text"));
        let first = editable.add_region("a", "one");
        let second = editable.add_region("b", "two");

        assert!(editable.activate(first));
        editable.handle_event(first, EditEvent::InputChanged("draft".to_string()));
        assert!(editable.activate(second));

        // The evicted session rolled back: value untouched, affordance
        // restored, no save call.
        let evicted = editable.region(first).expect("region");
        assert_eq!(evicted.value(), "one");
        assert!(evicted.affordance_visible());
        assert!(!editable.is_editing(first));
        assert!(calls.borrow().is_empty());

        assert_eq!(editable.dialog_owner(), Some(second));
        assert!(editable.is_editing(second));
    }

    #[test]
    fn test_inline_sessions_on_distinct_regions_coexist() {
        let (mut editable, calls) = setup(EditableConfig::for_mode("inline-text"));
        let a = editable.add_region("a", "one");
        let b = editable.add_region("b", "two");

        assert!(editable.activate(a));
        assert!(editable.activate(b));
        assert!(editable.is_editing(a) && editable.is_editing(b));

        editable.handle_event(a, EditEvent::InputChanged("ONE".to_string()));
        editable.handle_event(a, EditEvent::Confirm);
        editable.handle_event(b, EditEvent::Cancel);

        assert_eq!(editable.region(a).expect("region").value(), "ONE");
        assert_eq!(editable.region(b).expect("region").value(), "two");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_regions_iterate_in_insertion_order() {
        let (mut editable, _calls) = setup(EditableConfig::for_mode("text"));
        editable.add_region("first", "1");
        editable.add_region("second", "2");
        editable.add_region("third", "3");
        let keys: Vec<_> = editable.regions().map(|r| r.key.clone()).collect();
        assert_eq!(keys, ["first", "second", "third"]);
        assert_eq!(editable.len(), 3);
    }
}
