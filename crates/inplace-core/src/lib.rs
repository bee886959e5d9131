//! inplace core library
//!
//! Platform-agnostic core for in-place region editing: a registry of
//! interchangeable edit-mode handlers, each driving a document region
//! through a view → edit → (commit | rollback) → view lifecycle over a
//! shared dialog surface or an inline replacement, with exactly one commit
//! or rollback per edit session.

pub mod editable;
pub mod markup;
pub mod modes;
pub mod region;
pub mod session;
pub mod surface;

pub use editable::{Editable, EditableConfig, SaveCallback, SetupError};
pub use modes::{ModeHandler, ModeRegistry};
pub use region::{Region, RegionId};
pub use session::{EditSession, SessionState};
pub use surface::{
    DialogSlot, EditEvent, EditKey, EditResult, Surface, SurfaceControl, SurfacePlacement,
    DEFAULT_DIALOG_WIDTH, WIDE_DIALOG_WIDTH,
};
