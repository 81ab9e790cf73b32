//! desklogin: a minimal login form
//!
//! On submit the username and password are printed to stdout, one per line.

mod app;

use app::DeskLoginApp;

fn main() -> eframe::Result<()> {
    let (settings, options) = deskcore::startup("desklogin", "LOGIN SYSTEM", [400.0, 150.0]);

    eframe::run_native(
        "LOGIN SYSTEM",
        options,
        Box::new(move |cc| {
            deskcore::DeskTheme::from_settings(&settings).apply(&cc.egui_ctx);
            Box::new(DeskLoginApp::new(cc))
        }),
    )
}
