//! Desk theme: light visuals with powder blue accents.
//!
//! The calculator display is powder blue and the clock label purple.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct DeskColors;

impl DeskColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const POWDER_BLUE: Color32 = Color32::from_rgb(176, 224, 230);
    pub const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);
    pub const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
    pub const KEY_BLUE: Color32 = Color32::from_rgb(120, 160, 255);
}

/// Theme configuration for the desk apps
pub struct DeskTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for DeskTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl DeskTheme {
    /// Default theme with the body size taken from the user's settings.
    pub fn from_settings(settings: &crate::settings::DeskSettings) -> Self {
        let body = settings.font_size_body.clamp(8.0, 32.0);
        Self {
            font_size_body: body,
            font_size_heading: body * 1.6,
            font_size_small: body * 0.8,
            ..Default::default()
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_rounding = Rounding::same(2.0);
        visuals.menu_rounding = Rounding::same(2.0);
        visuals.selection.bg_fill = DeskColors::POWDER_BLUE;
        visuals.selection.stroke = Stroke::new(1.0, DeskColors::STEEL_BLUE);
        visuals.hyperlink_color = DeskColors::STEEL_BLUE;
        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Frame around the calculator display.
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(DeskColors::POWDER_BLUE)
            .stroke(Stroke::new(1.0, DeskColors::STEEL_BLUE))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }

    /// Frame for a clock label: purple fill, white text set by the caller.
    pub fn clock_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(DeskColors::PURPLE)
            .inner_margin(egui::Margin::symmetric(10.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(DeskColors::WHITE)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| egui::menu::bar(ui, add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Drop Cmd+/Cmd- zoom shortcuts so a stray key press cannot rescale the UI.
/// Call at the start of `update()`.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}
