//! Ordered option-list editor.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::markup;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement};

/// Structurally the list editor, but the source and target representation
/// is a sequence of `<option>` elements: each option becomes a display item
/// for editing and is written back as an option in final document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionListMode;

impl ModeHandler for OptionListMode {
    fn name(&self) -> &'static str {
        "option-list"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Dialog
    }

    fn begin(&self, region: &Region, _config: &EditableConfig) -> SurfaceControl {
        SurfaceControl::ItemList {
            items: markup::element_texts(region.value(), "option"),
            pending: String::new(),
        }
    }

    fn encode(&self, control: &SurfaceControl) -> String {
        match control {
            SurfaceControl::ItemList { items, .. } => markup::wrap_elements(items, "option"),
            other => unexpected_control(self.name(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_round_trip() {
        let region = Region::new(
            "k".to_string(),
            "<option>red</option><option>green</option>".to_string(),
        );
        let control = OptionListMode.begin(&region, &EditableConfig::default());
        assert_eq!(
            control,
            SurfaceControl::ItemList {
                items: vec!["red".to_string(), "green".to_string()],
                pending: String::new(),
            }
        );
        assert_eq!(
            OptionListMode.encode(&control),
            "<option>red</option><option>green</option>"
        );
    }

    #[test]
    fn test_decode_tolerates_attributes() {
        let region = Region::new(
            "k".to_string(),
            "<option selected=\"selected\">red</option>".to_string(),
        );
        let control = OptionListMode.begin(&region, &EditableConfig::default());
        assert_eq!(
            control,
            SurfaceControl::ItemList {
                items: vec!["red".to_string()],
                pending: String::new(),
            }
        );
    }
}
