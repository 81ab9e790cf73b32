//! desklogin application

use deskcore::repaint::RepaintController;
use deskcore::theme::consume_zoom_keys;
use egui::{Context, Key};
use std::io::{self, Write};

/// The two form fields. Nothing is validated or stored.
#[derive(Debug, Default, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Write the username and the password, each on its own line.
    pub fn submit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.username)?;
        writeln!(out, "{}", self.password)?;
        out.flush()
    }
}

pub struct DeskLoginApp {
    credentials: Credentials,
    repaint: RepaintController,
}

impl DeskLoginApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            credentials: Credentials::default(),
            repaint: RepaintController::new(),
        }
    }

    fn submit(&self) {
        log::info!("login submitted for user {:?}", self.credentials.username);
        let stdout = io::stdout();
        if let Err(e) = self.credentials.submit(&mut stdout.lock()) {
            log::error!("failed to write credentials: {e}");
        }
    }
}

impl eframe::App for DeskLoginApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        consume_zoom_keys(ctx);

        let mut submit = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("login_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Username");
                    ui.text_edit_singleline(&mut self.credentials.username);
                    ui.end_row();

                    ui.label("Password");
                    let password = ui.add(
                        egui::TextEdit::singleline(&mut self.credentials.password).password(true),
                    );
                    if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        submit = true;
                    }
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button("Login").clicked() {
                submit = true;
            }
        });

        if submit {
            self.submit();
        }
        self.repaint.end_frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_writes_two_lines() {
        let creds = Credentials {
            username: "alice".into(),
            password: "secret".into(),
        };
        let mut out = Vec::new();
        creds.submit(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "alice\nsecret\n");
    }

    #[test]
    fn test_submit_empty_fields() {
        let mut out = Vec::new();
        Credentials::default().submit(&mut out).unwrap();
        assert_eq!(out, b"\n\n");
    }

    #[test]
    fn test_submit_is_repeatable() {
        let creds = Credentials {
            username: "bob".into(),
            password: "p w".into(),
        };
        let mut out = Vec::new();
        creds.submit(&mut out).unwrap();
        creds.submit(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bob\np w\nbob\np w\n");
    }
}
