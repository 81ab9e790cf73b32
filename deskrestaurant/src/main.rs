//! deskrestaurant: restaurant panel with a live clock and a calculator

mod app;

use app::DeskRestaurantApp;

fn main() -> eframe::Result<()> {
    let (settings, options) =
        deskcore::startup("deskrestaurant", "Restaurant Management System", [900.0, 460.0]);

    eframe::run_native(
        "Restaurant Management System",
        options,
        Box::new(move |cc| {
            deskcore::DeskTheme::from_settings(&settings).apply(&cc.egui_ctx);
            Box::new(DeskRestaurantApp::new(cc, &settings))
        }),
    )
}
