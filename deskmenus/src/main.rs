//! deskmenus: menus, toolbars and a status bar around a single label

mod actions;
mod app;

use app::DeskMenusApp;

fn main() -> eframe::Result<()> {
    let (settings, options) = deskcore::startup("deskmenus", "Menus & Toolbars", [520.0, 320.0]);

    eframe::run_native(
        "Menus & Toolbars",
        options,
        Box::new(move |cc| {
            deskcore::DeskTheme::from_settings(&settings).apply(&cc.egui_ctx);
            Box::new(DeskMenusApp::new(cc, &settings))
        }),
    )
}
