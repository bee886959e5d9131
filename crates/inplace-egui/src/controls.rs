//! Per-mode editing controls, translated into core edit events.

use egui::Ui;
use inplace_core::{EditEvent, EditKey, RegionId, Surface, SurfaceControl};

use crate::sizing;

/// Render the surface's control and collect the gestures it produced this
/// frame.
///
/// The control binds a copy of the current draft; any change comes back as
/// an event so the core stays the single mutation channel. Keyboard
/// confirmation is routed through [`Surface::event_for_key`], so modes that
/// keep Enter as content never confirm from the keyboard.
pub fn control_events(ui: &mut Ui, region: RegionId, surface: &Surface) -> Vec<EditEvent> {
    let mut events = Vec::new();

    match &surface.control {
        SurfaceControl::SingleLine { text } => {
            let mut draft = text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut draft)
                    .desired_width(f32::INFINITY)
                    .id_salt(("inplace-single", region)),
            );
            if draft != *text {
                events.push(EditEvent::InputChanged(draft));
            }
            key_events(ui, surface, &response, &mut events);
        }
        SurfaceControl::MultiLine { text } => {
            let mut draft = text.clone();
            ui.add(
                egui::TextEdit::multiline(&mut draft)
                    .desired_rows(sizing::TEXTAREA_ROWS)
                    .desired_width(f32::INFINITY)
                    .id_salt(("inplace-multi", region)),
            );
            if draft != *text {
                events.push(EditEvent::InputChanged(draft));
            }
        }
        SurfaceControl::RichText { markup } => {
            // The adapter hosts raw markup; a dedicated rich text surface
            // would replace this control wholesale.
            let mut draft = markup.clone();
            ui.add(
                egui::TextEdit::multiline(&mut draft)
                    .code_editor()
                    .desired_rows(sizing::TEXTAREA_ROWS)
                    .desired_width(f32::INFINITY)
                    .id_salt(("inplace-rich", region)),
            );
            if draft != *markup {
                events.push(EditEvent::InputChanged(draft));
            }
        }
        SurfaceControl::Choice { options, selected } => {
            let current = selected
                .and_then(|index| options.get(index))
                .cloned()
                .unwrap_or_default();
            egui::ComboBox::from_id_salt(("inplace-choice", region))
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (index, option) in options.iter().enumerate() {
                        if ui
                            .selectable_label(*selected == Some(index), option)
                            .clicked()
                        {
                            events.push(EditEvent::Choose(index));
                        }
                    }
                });
        }
        SurfaceControl::ItemList { items, pending } => {
            for (index, item) in items.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Delete").clicked() {
                        events.push(EditEvent::RemoveItem(index));
                    }
                    if ui.small_button("⬆").clicked() && index > 0 {
                        events.push(EditEvent::MoveItem {
                            from: index,
                            to: index - 1,
                        });
                    }
                    if ui.small_button("⬇").clicked() && index + 1 < items.len() {
                        events.push(EditEvent::MoveItem {
                            from: index,
                            to: index + 1,
                        });
                    }
                    ui.label(item);
                });
            }
            ui.horizontal(|ui| {
                let mut draft = pending.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut draft)
                        .hint_text("New item")
                        .id_salt(("inplace-pending", region)),
                );
                if draft != *pending {
                    events.push(EditEvent::PendingChanged(draft));
                }
                key_events(ui, surface, &response, &mut events);
                if ui.button("Add item").clicked() {
                    events.push(EditEvent::AppendItem);
                }
            });
        }
    }

    events
}

/// Map Enter/Escape on a focused text input to the surface's gestures.
fn key_events(
    ui: &Ui,
    surface: &Surface,
    response: &egui::Response,
    events: &mut Vec<EditEvent>,
) {
    if !response.lost_focus() {
        return;
    }
    let key = ui.input(|i| {
        if i.key_pressed(egui::Key::Enter) {
            Some(EditKey::Enter)
        } else if i.key_pressed(egui::Key::Escape) {
            Some(EditKey::Escape)
        } else {
            None
        }
    });
    if let Some(key) = key {
        if let Some(event) = surface.event_for_key(key) {
            events.push(event);
        }
    }
}
