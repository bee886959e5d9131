//! Region display and the shared dialog surface.

use egui::{Align2, Color32, Context, CornerRadius, Frame, Margin, Pos2, Stroke, Ui, Vec2};
use inplace_core::{Editable, EditEvent, RegionId, SurfacePlacement};

use crate::buttons::{link_button, primary_button, secondary_button};
use crate::controls::control_events;
use crate::theme;

/// Render one region: its static display with the edit affordance, or the
/// inline editing surface while an inline session is open.
///
/// Dialog-backed sessions keep the static display (with the affordance
/// hidden) and are rendered by [`dialog_view`].
pub fn region_view(ui: &mut Ui, editable: &mut Editable, id: RegionId) {
    let inline_surface = editable.session(id).and_then(|session| {
        (session.surface().placement == SurfacePlacement::Inline)
            .then(|| session.surface().clone())
    });

    if let Some(surface) = inline_surface {
        let events = control_events(ui, id, &surface);
        for event in events {
            editable.handle_event(id, event);
        }
        return;
    }

    let Some(region) = editable.region(id) else {
        return;
    };
    let value = region.value().to_string();
    let affordance = region.affordance_visible();
    let label = editable.config().affordance_label.clone();

    ui.horizontal(|ui| {
        ui.label(value);
        if affordance && link_button(ui, &format!("— {label}")) {
            editable.activate(id);
        }
    });
}

/// Render every region of the collection in insertion order.
pub fn regions_view(ui: &mut Ui, editable: &mut Editable) {
    let ids: Vec<RegionId> = editable.region_ids().to_vec();
    for id in ids {
        region_view(ui, editable, id);
    }
}

/// Render the shared dialog surface, if a dialog-backed session is open.
///
/// Call once per frame at context scope, after the regions.
pub fn dialog_view(ctx: &Context, editable: &mut Editable) {
    let Some(owner) = editable.dialog_owner() else {
        return;
    };
    let Some(session) = editable.session(owner) else {
        return;
    };
    let surface = session.surface().clone();
    #[allow(deprecated)]
    let screen_rect = ctx.input(|i| i.content_rect());
    let mut events: Vec<EditEvent> = Vec::new();

    // Semi-transparent backdrop; the dialog is the only interactive layer.
    egui::Area::new(egui::Id::new("inplace_dialog_backdrop"))
        .fixed_pos(Pos2::ZERO)
        .order(egui::Order::Middle)
        .interactable(true)
        .show(ctx, |ui| {
            let (rect, _response) =
                ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(rect, 0.0, theme::BACKDROP);
        });

    egui::Area::new(egui::Id::new("inplace_dialog"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            dialog_frame().show(ui, |ui| {
                ui.set_width(surface.dialog_width.min(screen_rect.width() - 48.0));
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(8.0, 8.0);
                    events.extend(control_events(ui, owner, &surface));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if primary_button(ui, &surface.confirm_label) {
                            events.push(EditEvent::Confirm);
                        }
                        if secondary_button(ui, &surface.cancel_label) {
                            events.push(EditEvent::Cancel);
                        }
                    });
                });
            });
        });

    for event in events {
        editable.handle_event(owner, event);
    }
}

/// The dialog's frame: white card with a soft shadow.
fn dialog_frame() -> Frame {
    Frame::new()
        .fill(theme::DIALOG_BG)
        .corner_radius(CornerRadius::same(12))
        .stroke(Stroke::new(1.0, Color32::from_gray(200)))
        .shadow(egui::epaint::Shadow {
            spread: 2,
            blur: 20,
            offset: [0, 4],
            color: Color32::from_black_alpha(40),
        })
        .inner_margin(Margin::same(24))
}
