//! Inline choice selection.

use super::{unexpected_control, ModeHandler};
use crate::editable::EditableConfig;
use crate::region::Region;
use crate::surface::{SurfaceControl, SurfacePlacement};

/// Replaces the region's display with a single-selection control populated
/// from the caller-supplied option list plus a blank default. Choosing an
/// option commits immediately; there is no separate confirm step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectInlineMode;

impl ModeHandler for SelectInlineMode {
    fn name(&self) -> &'static str {
        "inline-select"
    }

    fn placement(&self) -> SurfacePlacement {
        SurfacePlacement::Inline
    }

    fn requires_options(&self) -> bool {
        true
    }

    fn begin(&self, _region: &Region, config: &EditableConfig) -> SurfaceControl {
        // Setup guarantees the option list is present for this mode.
        SurfaceControl::Choice {
            options: config.options.clone().unwrap_or_default(),
            selected: None,
        }
    }

    fn encode(&self, control: &SurfaceControl) -> String {
        match control {
            SurfaceControl::Choice { options, selected } => selected
                .and_then(|index| options.get(index).cloned())
                .unwrap_or_default(),
            other => unexpected_control(self.name(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(options: &[&str]) -> EditableConfig {
        EditableConfig {
            mode: "inline-select".to_string(),
            options: Some(options.iter().map(|s| s.to_string()).collect()),
            ..EditableConfig::default()
        }
    }

    #[test]
    fn test_begin_presents_blank_default() {
        let region = Region::new("k".to_string(), "B".to_string());
        let control = SelectInlineMode.begin(&region, &config(&["A", "B", "C"]));
        assert_eq!(
            control,
            SurfaceControl::Choice {
                options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                selected: None,
            }
        );
    }

    #[test]
    fn test_encode_chosen_option() {
        let control = SurfaceControl::Choice {
            options: vec!["A".to_string(), "B".to_string()],
            selected: Some(1),
        };
        assert_eq!(SelectInlineMode.encode(&control), "B");
    }
}
