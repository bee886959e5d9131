//! Rich text dialog edit.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement, WIDE_DIALOG_WIDTH};

/// Edits raw markup in a wide shared dialog.
///
/// The rich text surface owns document structure, so both directions are
/// the identity transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct RichTextMode;

impl ModeHandler for RichTextMode {
    fn name(&self) -> &'static str {
        "rich-text"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Dialog
    }

    fn begin(&self, region: &Region, _config: &EditableConfig) -> SurfaceControl {
        SurfaceControl::RichText {
            markup: region.value().to_string(),
        }
    }

    fn encode(&self, control: &SurfaceControl) -> String {
        match control {
            SurfaceControl::RichText { markup } => markup.clone(),
            other => unexpected_control(self.name(), other),
        }
    }

    fn dialog_width(&self) -> f32 {
        WIDE_DIALOG_WIDTH
    }
}
