//! deskcore: shared library for the deskdemos applications

pub mod calc;
pub mod clock;
pub mod expr;
pub mod keypad;
pub mod logging;
pub mod repaint;
pub mod settings;
pub mod status;
pub mod theme;
pub mod widgets;

pub use calc::Calculator;
pub use repaint::RepaintController;
pub use settings::DeskSettings;
pub use theme::DeskTheme;

/// Load settings, install the logger and build the native window options
/// every desk app starts with.
pub fn startup(app: &str, title: &str, inner_size: [f32; 2]) -> (DeskSettings, eframe::NativeOptions) {
    logging::init(app);
    let settings = DeskSettings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_title(title),
        ..Default::default()
    };
    (settings, options)
}
