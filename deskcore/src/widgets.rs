//! Small widgets shared by the desk apps

use crate::status::StatusBar;
use crate::theme::DeskColors;
use egui::{Response, Ui};
use std::time::Instant;

/// Toolbar separator (vertical line)
pub fn toolbar_separator(ui: &mut Ui) {
    let height = ui.spacing().interact_size.y;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, height), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().vline(
            rect.center().x,
            rect.y_range(),
            ui.visuals().widgets.noninteractive.bg_stroke,
        );
    }
}

/// A toolbar button that shows `tip` as a tooltip and reports it to the
/// status bar while hovered.
pub fn tool_button(ui: &mut Ui, text: &str, tip: &str, status: &mut StatusBar) -> Response {
    let response = ui.add(egui::Button::new(text).frame(false)).on_hover_text(tip);
    if response.hovered() {
        status.set_hover_tip(Some(tip));
    }
    response
}

/// Status bar: temporary message on the left, permanent indicators on the right.
pub fn status_bar(ui: &mut Ui, status: &StatusBar, now: Instant) {
    ui.horizontal(|ui| {
        if let Some(text) = status.current(now) {
            ui.label(text);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for text in status.permanent().iter().rev() {
                ui.label(egui::RichText::new(text).color(DeskColors::STEEL_BLUE));
            }
        });
    });
}
