//! egui adapter for in-place region editing.
//!
//! This crate hosts an [`inplace_core::Editable`] in an egui UI:
//!
//! - **Regions**: static display plus the edit affordance, with inline
//!   surfaces rendered in place ([`region_view`])
//! - **Dialog**: the single shared modal surface with confirm/cancel
//!   actions ([`dialog_view`])
//! - **Controls**: per-mode editing controls translated into core edit
//!   events ([`control_events`])
//!
//! The adapter owns no editing policy: every gesture is reported to the
//! core as an [`inplace_core::EditEvent`] and the core decides what it
//! means. Drag-reorder mechanics are simplified to move buttons; they fill
//! the sortable-collaborator role by emitting `MoveItem` events.

pub mod buttons;
pub mod controls;
pub mod view;

pub use buttons::{link_button, primary_button, secondary_button};
pub use controls::control_events;
pub use view::{dialog_view, region_view, regions_view};

/// Standard sizing constants used across the adapter.
pub mod sizing {
    /// Minimum button height in the dialog action row.
    pub const BUTTON_HEIGHT: f32 = 32.0;
    /// Standard corner radius.
    pub const CORNER_RADIUS: u8 = 6;
    /// Rows shown by multi-line controls.
    pub const TEXTAREA_ROWS: usize = 8;
}

/// Standard colors used across the adapter.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Accent color for primary actions and the edit affordance
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Dialog background
    pub const DIALOG_BG: Color32 = Color32::WHITE;
    /// Backdrop shade behind the dialog
    pub const BACKDROP: Color32 = Color32::from_black_alpha(80);
}
