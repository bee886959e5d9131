//! Single-line dialog edit.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement};

/// Edits one line of plain text in the shared dialog. The value passes
/// through unchanged in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMode;

impl ModeHandler for TextMode {
    fn name(&self) -> &'static str {
        "text"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Dialog
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_passes_through() {
        let region = Region::new("k".to_string(), "a <b> c".to_string());
        let control = TextMode.begin(&region, &EditableConfig::default());
        assert_eq!(
            control,
            SurfaceControl::SingleLine {
                text: "a <b> c".to_string()
            }
        );
        assert_eq!(TextMode.encode(&control), "a <b> c");
    }
}
