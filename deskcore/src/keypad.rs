//! Calculator widget: display field plus a 4×4 keypad.
//!
//! Button identity is data: [`KEYPAD`] maps every grid cell to a
//! [`CalcKey`], and every click goes through [`Calculator::press`].

use crate::calc::{CalcKey, Calculator, Operator};
use crate::theme::{DeskColors, DeskTheme};
use egui::{Event, Key, Ui};

/// Keypad layout, row by row.
pub const KEYPAD: [[CalcKey; 4]; 4] = [
    [CalcKey::Digit(7), CalcKey::Digit(8), CalcKey::Digit(9), CalcKey::Op(Operator::Add)],
    [CalcKey::Digit(4), CalcKey::Digit(5), CalcKey::Digit(6), CalcKey::Op(Operator::Subtract)],
    [CalcKey::Digit(1), CalcKey::Digit(2), CalcKey::Digit(3), CalcKey::Op(Operator::Multiply)],
    [CalcKey::Digit(0), CalcKey::Clear, CalcKey::Equals, CalcKey::Op(Operator::Divide)],
];

const DISPLAY_HEIGHT: f32 = 48.0;
const BUTTON_HEIGHT: f32 = 44.0;

/// Collect the calculator keys produced by one input event.
pub fn keys_for_event(event: &Event, out: &mut Vec<CalcKey>) {
    match event {
        Event::Text(text) => out.extend(text.chars().filter_map(CalcKey::from_char)),
        Event::Key { key, pressed: true, .. } => match key {
            Key::Enter => out.push(CalcKey::Equals),
            Key::Escape => out.push(CalcKey::Clear),
            Key::Backspace => out.push(CalcKey::Backspace),
            _ => {}
        },
        _ => {}
    }
}

/// Feed keyboard input to the calculator. Skipped while a text field has
/// keyboard focus so typing into it does not reach the calculator.
/// Returns whether any key was handled.
pub fn handle_keys(ctx: &egui::Context, calc: &mut Calculator) -> bool {
    if ctx.memory(|mem| mem.focused().is_some()) {
        return false;
    }
    let mut keys = Vec::new();
    ctx.input(|i| {
        for event in &i.events {
            keys_for_event(event, &mut keys);
        }
    });
    for &key in &keys {
        log::debug!("key {key:?}");
        calc.press(key);
    }
    !keys.is_empty()
}

pub fn display(ui: &mut Ui, calc: &Calculator) {
    DeskTheme::display_frame().show(ui, |ui| {
        ui.set_min_height(DISPLAY_HEIGHT);
        ui.set_max_height(DISPLAY_HEIGHT);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(calc.display())
                    .font(egui::FontId::proportional(28.0))
                    .color(DeskColors::BLACK)
                    .strong(),
            );
        });
    });
}

/// Draw the keypad grid. Returns whether a button was clicked.
pub fn keypad(ui: &mut Ui, calc: &mut Calculator) -> bool {
    let spacing = ui.spacing().item_spacing.x;
    let btn_w = (ui.available_width() - spacing * 3.0) / 4.0;
    let mut clicked = false;

    for row in KEYPAD {
        ui.horizontal(|ui| {
            for key in row {
                let text = egui::RichText::new(key.label())
                    .font(egui::FontId::proportional(20.0))
                    .strong();
                let button = egui::Button::new(text).fill(DeskColors::KEY_BLUE);
                if ui.add_sized([btn_w, BUTTON_HEIGHT], button).clicked() {
                    log::debug!("button {key:?}");
                    calc.press(key);
                    clicked = true;
                }
            }
        });
    }
    clicked
}

/// Display and keypad together.
pub fn calculator(ui: &mut Ui, calc: &mut Calculator) -> bool {
    display(ui, calc);
    ui.add_space(8.0);
    keypad(ui, calc)
}
