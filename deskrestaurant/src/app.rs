//! deskrestaurant application

use chrono::Local;
use deskcore::clock::ClockLabel;
use deskcore::keypad;
use deskcore::repaint::RepaintController;
use deskcore::theme::{consume_zoom_keys, DeskColors};
use deskcore::{Calculator, DeskSettings};
use egui::{Context, RichText};
use std::time::Instant;

const TITLE: &str = "Restaurant Management System";

/// The data-entry fields on the left of the panel. Each has its own buffer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderFields {
    pub reference: String,
    pub customer: String,
    pub room: String,
    pub food: String,
}

impl OrderFields {
    pub const LABELS: [&'static str; 4] =
        ["Reference", "Customer Data", "Room Allocation", "Food Expenses"];

    pub fn entries_mut(&mut self) -> [(&'static str, &mut String); 4] {
        let [reference, customer, room, food] = Self::LABELS;
        [
            (reference, &mut self.reference),
            (customer, &mut self.customer),
            (room, &mut self.room),
            (food, &mut self.food),
        ]
    }
}

pub struct DeskRestaurantApp {
    fields: OrderFields,
    calc: Calculator,
    clock: ClockLabel,
    repaint: RepaintController,
}

impl DeskRestaurantApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &DeskSettings) -> Self {
        Self {
            fields: OrderFields::default(),
            calc: Calculator::new(),
            clock: ClockLabel::new(settings.tick_interval(), settings.use_24h_time, Instant::now()),
            repaint: RepaintController::new(),
        }
    }

    fn tick_clock(&mut self) {
        let now = Instant::now();
        if self.clock.tick(now, &Local::now()) {
            log::trace!("clock {}", self.clock.text());
        }
        self.repaint.request_after(self.clock.until_next_tick(now));
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(TITLE)
                .size(34.0)
                .strong()
                .color(DeskColors::STEEL_BLUE),
        );
        deskcore::DeskTheme::clock_frame().show(ui, |ui| {
            ui.label(
                RichText::new(self.clock.text())
                    .size(24.0)
                    .strong()
                    .color(DeskColors::WHITE),
            );
        });
    }

    fn render_fields(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("order_fields")
            .num_columns(2)
            .spacing([16.0, 14.0])
            .show(ui, |ui| {
                for (label, value) in self.fields.entries_mut() {
                    ui.label(RichText::new(label).size(16.0).strong());
                    ui.text_edit_singleline(value);
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for DeskRestaurantApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        consume_zoom_keys(ctx);
        self.tick_clock();

        if keypad::handle_keys(ctx, &mut self.calc) {
            self.repaint.mark_needs_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
            ui.add_space(4.0);
        });

        egui::SidePanel::right("calculator")
            .resizable(false)
            .exact_width(340.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                keypad::calculator(ui, &mut self.calc);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_fields(ui);
        });

        self.repaint.end_frame(ctx);
    }
}
