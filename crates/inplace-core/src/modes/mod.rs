//! Edit mode handlers and their registry.
//!
//! Each mode is a stateless strategy satisfying [`ModeHandler`]: it decodes
//! a region's content into an editing control, and re-encodes the edited
//! drafts on commit. Modes are looked up by name in a [`ModeRegistry`] at
//! setup time; an unknown name is a setup error, never an interaction-time
//! surprise.

mod list;
mod option_list;
mod rich_text;
mod select_inline;
mod text;
mod text_inline;
mod textarea;

pub use list::ListMode;
pub use option_list::OptionListMode;
pub use rich_text::RichTextMode;
pub use select_inline::SelectInlineMode;
pub use text::TextMode;
pub use text_inline::TextInlineMode;
pub use textarea::TextareaMode;

use std::collections::HashMap;
use std::fmt;

use crate::editable::{EditableConfig, SetupError};
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement, DEFAULT_DIALOG_WIDTH};

/// A stateless editing strategy, keyed by name in the registry.
pub trait ModeHandler: Send + Sync {
    /// Registry key for this mode.
    fn name(&self) -> &'static str;

    /// Where the editing surface is hosted.
    fn placement(&self) -> SurfacePlacement;

    /// Whether setup must supply an option list for this mode.
    fn requires_options(&self) -> bool {
        false
    }

    /// Build the editing control from the region's current value, applying
    /// the mode's decoding.
    fn begin(&self, region: &Region, config: &EditableConfig) -> SurfaceControl;

    /// Extract and re-encode the edited value from the control.
    fn encode(&self, control: &SurfaceControl) -> String;

    /// Width hint for the dialog host.
    fn dialog_width(&self) -> f32 {
        DEFAULT_DIALOG_WIDTH
    }
}

/// Fallback for a handler handed a control it did not build.
pub(crate) fn unexpected_control(mode: &str, control: &SurfaceControl) -> String {
    log::warn!("{mode} mode asked to encode a foreign control: {control:?}");
    String::new()
}

/// Registry of mode handlers, keyed by mode name.
pub struct ModeRegistry {
    handlers: HashMap<&'static str, Box<dyn ModeHandler>>,
}

impl ModeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with all built-in modes registered.
    pub fn with_builtin_modes() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TextMode));
        registry.register(Box::new(TextInlineMode));
        registry.register(Box::new(TextareaMode));
        registry.register(Box::new(RichTextMode));
        registry.register(Box::new(SelectInlineMode));
        registry.register(Box::new(ListMode));
        registry.register(Box::new(OptionListMode));
        registry
    }

    /// Register a handler under its own name, replacing any prior entry.
    pub fn register(&mut self, handler: Box<dyn ModeHandler>) {
        if self.handlers.insert(handler.name(), handler).is_some() {
            log::debug!("mode handler replaced an existing registration");
        }
    }

    /// Look up a handler. Unknown names are a setup error.
    pub fn resolve(&self, name: &str) -> Result<&dyn ModeHandler, SetupError> {
        self.handlers
            .get(name)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| SetupError::UnknownMode(name.to_string()))
    }

    /// Whether a mode name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered mode names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("ModeRegistry").field("modes", &names).finish()
    }
}
