//! Editing surface model shared by all modes.
//!
//! A mode handler builds a [`SurfaceControl`] from a region's content; the
//! hosting UI renders it and reports gestures back as [`EditEvent`]s. The
//! single shared dialog is modelled as an explicitly owned [`DialogSlot`]
//! rather than an ambient global.

use crate::region::RegionId;

/// Default dialog width in logical pixels.
pub const DEFAULT_DIALOG_WIDTH: f32 = 500.0;
/// Wider dialog used by the rich text mode.
pub const WIDE_DIALOG_WIDTH: f32 = 790.0;

/// Where a mode hosts its editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePlacement {
    /// The shared dialog surface.
    Dialog,
    /// An element replacing the region's display in place.
    Inline,
}

/// The mode-specific editing control and its draft state.
///
/// The pending value of an edit session lives in these drafts until the
/// session commits or rolls back.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceControl {
    /// One-line text input.
    SingleLine { text: String },
    /// Paragraph input holding literal newlines.
    MultiLine { text: String },
    /// Raw markup; the rich text surface owns structure.
    RichText { markup: String },
    /// Single selection from a fixed option list. `None` is the blank
    /// default presented before any choice.
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
    /// Ordered text items plus a pending-append draft. Per-item delete
    /// affordances and reordering are supplied by the hosting UI.
    ItemList { items: Vec<String>, pending: String },
}

/// An editing surface: the control plus its hosting and action labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub placement: SurfacePlacement,
    pub control: SurfaceControl,
    /// Confirm action label.
    pub confirm_label: String,
    /// Cancel action label.
    pub cancel_label: String,
    /// Width hint for the dialog host.
    pub dialog_width: f32,
}

impl Surface {
    /// Map a key press to the gesture it means for the active control.
    ///
    /// Multi-line and rich text controls keep Enter as content and get no
    /// keyboard confirmation; the choice control commits through
    /// [`EditEvent::Choose`] alone.
    pub fn event_for_key(&self, key: EditKey) -> Option<EditEvent> {
        match (&self.control, key) {
            (SurfaceControl::SingleLine { .. }, EditKey::Enter) => Some(EditEvent::Confirm),
            (SurfaceControl::SingleLine { .. }, EditKey::Escape) => Some(EditEvent::Cancel),
            (SurfaceControl::ItemList { .. }, EditKey::Enter) => Some(EditEvent::AppendItem),
            (SurfaceControl::ItemList { .. }, EditKey::Escape) => Some(EditEvent::Cancel),
            _ => None,
        }
    }
}

/// Keyboard keys with surface-level meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

/// A user gesture on an active editing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    /// Replace the text draft of a text control.
    InputChanged(String),
    /// Replace the pending-append draft of an item list.
    PendingChanged(String),
    /// Append the pending draft as a new item. Ignored while the draft is
    /// empty.
    AppendItem,
    /// Delete one item, no confirmation.
    RemoveItem(usize),
    /// Reorder reported by the hosting UI's sortable collaborator.
    MoveItem { from: usize, to: usize },
    /// Pick an option; the choice control commits immediately.
    Choose(usize),
    /// Confirm the edit.
    Confirm,
    /// Cancel the edit.
    Cancel,
}

/// Result of feeding an event to an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Draft updated; the session stays open.
    Handled,
    /// The edit was committed and the session terminated.
    Committed,
    /// The edit was rolled back and the session terminated.
    RolledBack,
    /// The event did not apply to the active control.
    NotHandled,
}

/// The single shared dialog surface for a document, as an explicitly owned
/// resource handle.
///
/// Acquiring the slot for a new session evicts any prior owner; the
/// controller rolls the evicted session back before reuse. With the
/// affordance discipline in place at most one dialog-backed session is ever
/// open, so eviction does not arise in normal operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogSlot {
    owner: Option<RegionId>,
}

impl DialogSlot {
    /// Create an unheld slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot for `owner`, returning the evicted prior owner if any.
    pub(crate) fn acquire(&mut self, owner: RegionId) -> Option<RegionId> {
        let evicted = self.owner.filter(|prior| *prior != owner);
        self.owner = Some(owner);
        evicted
    }

    /// Release the slot if `owner` still holds it.
    pub(crate) fn release(&mut self, owner: RegionId) {
        if self.owner == Some(owner) {
            self.owner = None;
        }
    }

    /// The region whose session currently holds the dialog.
    pub fn owner(&self) -> Option<RegionId> {
        self.owner
    }

    /// Whether any session holds the dialog.
    pub fn is_held(&self) -> bool {
        self.owner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn surface(control: SurfaceControl) -> Surface {
        Surface {
            placement: SurfacePlacement::Inline,
            control,
            confirm_label: "Save".to_string(),
            cancel_label: "Cancel".to_string(),
            dialog_width: DEFAULT_DIALOG_WIDTH,
        }
    }

    #[test]
    fn test_single_line_keys() {
        let s = surface(SurfaceControl::SingleLine {
            text: String::new(),
        });
        assert_eq!(s.event_for_key(EditKey::Enter), Some(EditEvent::Confirm));
        assert_eq!(s.event_for_key(EditKey::Escape), Some(EditEvent::Cancel));
    }

    #[test]
    fn test_item_list_enter_appends() {
        let s = surface(SurfaceControl::ItemList {
            items: vec![],
            pending: "x".to_string(),
        });
        assert_eq!(s.event_for_key(EditKey::Enter), Some(EditEvent::AppendItem));
    }

    #[test]
    fn test_multi_line_keeps_enter_as_content() {
        let s = surface(SurfaceControl::MultiLine {
            text: String::new(),
        });
        assert_eq!(s.event_for_key(EditKey::Enter), None);
        assert_eq!(s.event_for_key(EditKey::Escape), None);
    }

    #[test]
    fn test_dialog_slot_acquire_release() {
        let mut slot = DialogSlot::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(!slot.is_held());
        assert_eq!(slot.acquire(a), None);
        assert_eq!(slot.owner(), Some(a));

        // A second acquisition evicts the prior owner.
        assert_eq!(slot.acquire(b), Some(a));
        assert_eq!(slot.owner(), Some(b));

        // Releasing with a stale owner is a no-op.
        slot.release(a);
        assert_eq!(slot.owner(), Some(b));
        slot.release(b);
        assert!(!slot.is_held());
    }

    #[test]
    fn test_dialog_slot_reacquire_same_owner() {
        let mut slot = DialogSlot::new();
        let a = Uuid::new_v4();
        slot.acquire(a);
        assert_eq!(slot.acquire(a), None);
        assert_eq!(slot.owner(), Some(a));
    }
}
