//! Multi-line dialog edit.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::markup;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement};

/// Edits a paragraph in the shared dialog.
///
/// The region value stores its line structure as `<br>` tags. Decoding
/// drops literal newlines, turns break tags into newlines, and strips one
/// stray tag; encoding strips any tags the user typed and turns newlines
/// back into `<br />`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaMode;

impl ModeHandler for TextareaMode {
    fn name(&self) -> &'static str {
        "textarea"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Dialog
    }

    fn begin(&self, region: &Region, _config: &EditableConfig) -> SurfaceControl {
        let text = markup::strip_first_tag(&markup::br_tags_to_newlines(&markup::strip_newlines(
            region.value(),
        )));
        SurfaceControl::MultiLine { text }
    }

    fn encode(&self, control: &SurfaceControl) -> String {
        match control {
            SurfaceControl::MultiLine { text } => {
                markup::newlines_to_br_tags(&markup::strip_tags(text))
            }
            other => unexpected_control(self.name(), other),
        }
    }
}
