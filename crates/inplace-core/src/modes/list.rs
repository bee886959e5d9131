//! Ordered list editor.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::markup;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement};

/// Edits a sequence of `<li>` elements in the shared dialog: append via the
/// pending input, per-item delete, reordering via the host's sortable
/// collaborator. The committed markup carries the items alone, with no
/// affordance markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListMode;

impl ModeHandler for ListMode {
    fn name(&self) -> &'static str {
        "list"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Dialog
    }

    fn begin(&self, region: &Region, _config: &EditableConfig) -> SurfaceControl {
        SurfaceControl::ItemList {
            items: markup::element_texts(region.value(), "li"),
            pending: String::new(),
        }
    }

    fn encode(&self, control: &SurfaceControl) -> String {
        match control {
            SurfaceControl::ItemList { items, .. } => markup::wrap_elements(items, "li"),
            other => unexpected_control(self.name(), other),
        }
    }
}
