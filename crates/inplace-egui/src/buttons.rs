//! Button helpers shared by the dialog and the region affordance.

use egui::{Color32, CornerRadius, CursorIcon, RichText, Ui, Vec2};

use crate::{sizing, theme};

/// A filled accent button for the confirm action.
pub fn primary_button(ui: &mut Ui, label: &str) -> bool {
    let button = egui::Button::new(RichText::new(label).color(Color32::WHITE))
        .fill(theme::ACCENT)
        .min_size(Vec2::new(96.0, sizing::BUTTON_HEIGHT))
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS));
    ui.add(button)
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}

/// A neutral button for the cancel action.
pub fn secondary_button(ui: &mut Ui, label: &str) -> bool {
    let button = egui::Button::new(RichText::new(label).color(theme::TEXT))
        .fill(Color32::from_gray(240))
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .min_size(Vec2::new(96.0, sizing::BUTTON_HEIGHT))
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS));
    ui.add(button)
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}

/// A link-styled affordance button.
pub fn link_button(ui: &mut Ui, label: &str) -> bool {
    ui.link(RichText::new(label).color(theme::ACCENT).size(12.0))
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}
