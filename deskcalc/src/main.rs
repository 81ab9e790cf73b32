//! deskcalc: a four-function calculator
//!
//! Keypad and keyboard input accumulate into an expression buffer that is
//! evaluated on `=`.

mod app;

use app::DeskCalcApp;

fn main() -> eframe::Result<()> {
    let (settings, options) = deskcore::startup("deskcalc", "Calculator", [340.0, 330.0]);

    eframe::run_native(
        "Calculator",
        options,
        Box::new(move |cc| {
            deskcore::DeskTheme::from_settings(&settings).apply(&cc.egui_ctx);
            Box::new(DeskCalcApp::new(cc))
        }),
    )
}
