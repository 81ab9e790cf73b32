//! deskcalc application

use deskcore::keypad;
use deskcore::repaint::RepaintController;
use deskcore::theme::{consume_zoom_keys, menu_bar};
use deskcore::Calculator;
use egui::Context;

pub struct DeskCalcApp {
    calc: Calculator,
    show_about: bool,
    repaint: RepaintController,
}

impl DeskCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            calc: Calculator::new(),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.separator();
                ui.label("keys: 0-9 . + - * / Enter Esc Backspace");
                ui.label("** power, // floor division");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for DeskCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        consume_zoom_keys(ctx);

        if !self.show_about && keypad::handle_keys(ctx, &mut self.calc) {
            self.repaint.mark_needs_repaint();
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear").clicked() {
                        log::debug!("clear from menu");
                        self.calc.clear();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        log::debug!("about opened");
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            keypad::calculator(ui, &mut self.calc);
        });

        if self.show_about {
            self.render_about(ctx);
        }
        self.repaint.end_frame(ctx);
    }
}
