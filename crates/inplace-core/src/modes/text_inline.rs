//! Single-line inline edit.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement};

/// Edits one line of plain text in place of the region's display, confirmed
/// with Enter and cancelled with Escape.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInlineMode;

impl ModeHandler for TextInlineMode {
    fn name(&self) -> &'static str {
        "inline-text"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Inline
    }

    fn begin(&self, region: &Region, _config: &EditableConfig) -> SurfaceControl {
        SurfaceControl::SingleLine {
            text: region.value().to_string(),
        }
    }

    fn encode(&self, control: &SurfaceControl) -> String {
        match control {
            SurfaceControl::SingleLine { text } => text.clone(),
            other => unexpected_control(self.name(), other),
        }
    }
}
