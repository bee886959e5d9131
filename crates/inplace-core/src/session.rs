//! Edit session lifecycle.

use crate::region::{Region, RegionId};
use crate::surface::{EditEvent, EditResult, Surface, SurfaceControl};

/// Lifecycle state of an edit session.
///
/// The only transitions are `Editing → Terminated`, via commit or rollback.
/// There are no transitions out of `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The surface is live and accepting gestures.
    #[default]
    Editing,
    /// The session ended in a commit or rollback.
    Terminated,
}

/// One in-progress edit on one region.
///
/// The session owns its editing surface for its whole lifetime; the pending
/// value lives in the surface control's drafts. Terminal side effects
/// (encoding, region update, the save callback, affordance restore) are
/// performed by the owning [`Editable`] controller when [`apply`] reports a
/// terminal result.
///
/// [`Editable`]: crate::editable::Editable
/// [`apply`]: EditSession::apply
#[derive(Debug, Clone)]
pub struct EditSession {
    region: RegionId,
    state: SessionState,
    surface: Surface,
}

impl EditSession {
    /// Start a session over a prepared surface, hiding the region's
    /// affordance for the session's duration.
    pub(crate) fn begin(region: &mut Region, surface: Surface) -> Self {
        region.set_affordance_visible(false);
        Self {
            region: region.id(),
            state: SessionState::Editing,
            surface,
        }
    }

    /// The region this session edits.
    pub fn region(&self) -> RegionId {
        self.region
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The editing surface, including the current drafts.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Feed one gesture into the session.
    ///
    /// Draft events mutate the surface control in place. `Confirm`, `Cancel`
    /// and a valid `Choose` terminate the session and report `Committed` or
    /// `RolledBack`; the controller then performs the terminal side effects.
    /// Events that do not fit the active control, or arrive after
    /// termination, report `NotHandled`.
    pub(crate) fn apply(&mut self, event: EditEvent) -> EditResult {
        if self.state == SessionState::Terminated {
            log::debug!("event {event:?} on terminated session ignored");
            return EditResult::NotHandled;
        }

        match (&mut self.surface.control, event) {
            (SurfaceControl::SingleLine { text }, EditEvent::InputChanged(new))
            | (SurfaceControl::MultiLine { text }, EditEvent::InputChanged(new)) => {
                *text = new;
                EditResult::Handled
            }
            (SurfaceControl::RichText { markup }, EditEvent::InputChanged(new)) => {
                *markup = new;
                EditResult::Handled
            }
            (SurfaceControl::ItemList { pending, .. }, EditEvent::PendingChanged(new)) => {
                *pending = new;
                EditResult::Handled
            }
            (SurfaceControl::ItemList { items, pending }, EditEvent::AppendItem) => {
                // Empty input appends nothing, silently.
                if !pending.is_empty() {
                    items.push(std::mem::take(pending));
                }
                EditResult::Handled
            }
            (SurfaceControl::ItemList { items, .. }, EditEvent::RemoveItem(index)) => {
                if index < items.len() {
                    items.remove(index);
                    EditResult::Handled
                } else {
                    EditResult::NotHandled
                }
            }
            (SurfaceControl::ItemList { items, .. }, EditEvent::MoveItem { from, to }) => {
                if from < items.len() && to < items.len() {
                    let item = items.remove(from);
                    items.insert(to, item);
                    EditResult::Handled
                } else {
                    EditResult::NotHandled
                }
            }
            (SurfaceControl::Choice { options, selected }, EditEvent::Choose(index)) => {
                // Choosing commits immediately; there is no separate
                // confirm step for the choice control.
                if index < options.len() {
                    *selected = Some(index);
                    self.state = SessionState::Terminated;
                    EditResult::Committed
                } else {
                    EditResult::NotHandled
                }
            }
            // The choice control has no bare confirm gesture.
            (SurfaceControl::Choice { selected: None, .. }, EditEvent::Confirm) => {
                EditResult::NotHandled
            }
            (_, EditEvent::Confirm) => {
                self.state = SessionState::Terminated;
                EditResult::Committed
            }
            (_, EditEvent::Cancel) => {
                self.state = SessionState::Terminated;
                EditResult::RolledBack
            }
            (control, event) => {
                log::debug!("event {event:?} does not fit control {control:?}");
                EditResult::NotHandled
            }
        }
    }
}
