//! deskmenus application
//!
//! A main window whose only content is a label. Menus, toolbars, the
//! context menu and keyboard shortcuts all trigger the same actions, and
//! every action just rewrites the label.

use crate::actions::{
    self, parse_mnemonic, ActionId, MenuItem, ToolItem, Toolbar, ToolbarId, ACTIONS, CONTEXT_MENU,
    MENUS, TOOLBARS,
};
use deskcore::repaint::RepaintController;
use deskcore::status::StatusBar;
use deskcore::theme::{consume_zoom_keys, menu_bar};
use deskcore::widgets::{status_bar, tool_button, toolbar_separator};
use deskcore::DeskSettings;
use egui::text::LayoutJob;
use egui::{Context, Sense, TextFormat, Ui};
use std::time::{Duration, Instant};

const DEFAULT_FONT_SIZE: u32 = 18;

/// Something the user asked for during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(ActionId),
    OpenRecent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Close,
}

pub struct DeskMenusApp {
    /// Bold part of the central label.
    emphasis: String,
    /// Plain remainder of the central label.
    suffix: String,
    font_size: u32,
    toolbars_visible: [bool; 3],
    recent_file_count: usize,
    status_timeout: Duration,
    status: StatusBar,
    repaint: RepaintController,
}

impl DeskMenusApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &DeskSettings) -> Self {
        Self::with_settings(settings, Instant::now())
    }

    pub fn with_settings(settings: &DeskSettings, now: Instant) -> Self {
        let mut app = Self {
            emphasis: String::new(),
            suffix: "Hello, World".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            toolbars_visible: [true; 3],
            recent_file_count: settings.recent_file_count,
            status_timeout: settings.status_timeout(),
            status: StatusBar::new(),
            repaint: RepaintController::new(),
        };
        app.status.show_message("Ready", Some(app.status_timeout), now);
        app.refresh_word_count();
        app
    }

    pub fn central_text(&self) -> String {
        format!("{}{}", self.emphasis, self.suffix)
    }

    fn set_central(&mut self, emphasis: &str, suffix: &str) {
        self.emphasis = emphasis.to_string();
        self.suffix = suffix.to_string();
        self.refresh_word_count();
    }

    fn refresh_word_count(&mut self) {
        let words = actions::word_count(&self.central_text());
        self.status.set_permanent(0, format!("{words} Words"));
    }

    pub fn run(&mut self, command: Command) -> Outcome {
        log::debug!("command {command:?}");
        match command {
            Command::Action(ActionId::Exit) => return Outcome::Close,
            Command::Action(id) => self.set_central(id.action().trail, " clicked"),
            Command::OpenRecent(name) => self.set_central(&name, " opened"),
        }
        Outcome::Continue
    }

    fn toolbar_index(id: ToolbarId) -> usize {
        match id {
            ToolbarId::File => 0,
            ToolbarId::Edit => 1,
            ToolbarId::Help => 2,
        }
    }

    pub fn toolbar_visible(&self, id: ToolbarId) -> bool {
        self.toolbars_visible[Self::toolbar_index(id)]
    }

    pub fn set_toolbar_visible(&mut self, id: ToolbarId, visible: bool) {
        log::debug!("toolbar {id:?} visible: {visible}");
        self.toolbars_visible[Self::toolbar_index(id)] = visible;
    }

    fn shortcut_commands(ctx: &Context) -> Vec<Command> {
        ctx.input(|i| {
            let mut out = Vec::new();
            for event in &i.events {
                for action in ACTIONS {
                    if action.shortcut.is_some_and(|s| s.matches(event)) {
                        out.push(Command::Action(action.id));
                    }
                }
            }
            out
        })
    }

    fn mnemonic_job(ui: &Ui, text: &str) -> LayoutJob {
        let (display, access) = parse_mnemonic(text);
        let font_id = egui::TextStyle::Button.resolve(ui.style());
        let color = ui.visuals().text_color();
        let plain = TextFormat::simple(font_id.clone(), color);
        let underlined = TextFormat {
            underline: egui::Stroke::new(1.0, color),
            ..TextFormat::simple(font_id, color)
        };

        let mut job = LayoutJob::default();
        match access {
            Some(i) => {
                let next = display[i..].chars().next().map_or(i, |c| i + c.len_utf8());
                job.append(&display[..i], 0.0, plain.clone());
                job.append(&display[i..next], 0.0, underlined);
                job.append(&display[next..], 0.0, plain);
            }
            None => job.append(&display, 0.0, plain),
        }
        job
    }

    fn render_action_entry(&mut self, ui: &mut Ui, id: ActionId, commands: &mut Vec<Command>) {
        let action = id.action();
        let mut button = egui::Button::new(Self::mnemonic_job(ui, action.text));
        if let Some(shortcut) = action.shortcut {
            button = button.shortcut_text(shortcut.label());
        }
        let response = ui.add(button);
        if response.hovered() {
            self.status.set_hover_tip(Some(action.tip));
        }
        if response.clicked() {
            commands.push(Command::Action(id));
            ui.close_menu();
        }
    }

    fn render_menu_items(&mut self, ui: &mut Ui, items: &[MenuItem], commands: &mut Vec<Command>) {
        for item in items {
            match item {
                MenuItem::Action(id) => self.render_action_entry(ui, *id, commands),
                MenuItem::Separator => {
                    ui.separator();
                }
                MenuItem::Submenu(title, sub) => {
                    let job = Self::mnemonic_job(ui, title);
                    ui.menu_button(job, |ui| {
                        self.render_menu_items(ui, sub, commands);
                    });
                }
                MenuItem::OpenRecent => {
                    ui.menu_button("Open Recent", |ui| {
                        // rebuilt each time the submenu is shown
                        for name in actions::recent_files(self.recent_file_count) {
                            if ui.button(&name).clicked() {
                                commands.push(Command::OpenRecent(name));
                                ui.close_menu();
                            }
                        }
                    });
                }
            }
        }
    }

    fn render_toolbar(&mut self, ui: &mut Ui, toolbar: &Toolbar, commands: &mut Vec<Command>) {
        for item in toolbar.items {
            match item {
                ToolItem::Action(id) => {
                    let action = id.action();
                    let (text, _) = parse_mnemonic(action.text);
                    if tool_button(ui, text.trim_end_matches("..."), action.tip, &mut self.status).clicked() {
                        commands.push(Command::Action(*id));
                    }
                }
                ToolItem::Separator => toolbar_separator(ui),
                ToolItem::FontSize => {
                    ui.add(
                        egui::DragValue::new(&mut self.font_size)
                            .clamp_range(1..=99)
                            .speed(0.2),
                    )
                    .on_hover_text("Font size");
                }
            }
        }
    }

    fn toolbar_visibility_menu(&mut self, ui: &mut Ui) {
        for toolbar in &TOOLBARS {
            let mut visible = self.toolbar_visible(toolbar.id);
            if ui.checkbox(&mut visible, toolbar.title).clicked() {
                self.set_toolbar_visible(toolbar.id, visible);
                ui.close_menu();
            }
        }
    }

    /// Toolbar panel with a right-click menu for showing and hiding toolbars.
    fn toolbar_strip(&mut self, ui: &mut Ui, ids: &[ToolbarId], commands: &mut Vec<Command>) {
        let background = ui.interact(ui.max_rect(), ui.id().with("toolbar_bg"), Sense::click());
        for (n, toolbar) in TOOLBARS.iter().filter(|t| ids.contains(&t.id)).enumerate() {
            if !self.toolbar_visible(toolbar.id) {
                continue;
            }
            if n > 0 {
                toolbar_separator(ui);
            }
            self.render_toolbar(ui, toolbar, commands);
        }
        background.context_menu(|ui| self.toolbar_visibility_menu(ui));
    }

    fn render_central(&mut self, ui: &mut Ui, commands: &mut Vec<Command>) {
        let size = self.font_size as f32;
        let color = ui.visuals().strong_text_color();
        let mut job = LayoutJob::default();
        job.append(
            &self.emphasis,
            0.0,
            TextFormat::simple(egui::FontId::proportional(size), color),
        );
        job.append(
            &self.suffix,
            0.0,
            TextFormat::simple(egui::FontId::proportional(size), ui.visuals().text_color()),
        );

        ui.centered_and_justified(|ui| {
            let response = ui.add(egui::Label::new(job).sense(Sense::click()));
            response.context_menu(|ui| self.render_menu_items(ui, CONTEXT_MENU, commands));
        });
    }
}

impl eframe::App for DeskMenusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        consume_zoom_keys(ctx);

        let now = Instant::now();
        if let Some(left) = self.status.expire(now) {
            self.repaint.request_after(left);
        }
        // Popups set their tips after the status bar is laid out, so the bar
        // shows what was hovered last frame.
        let shown = self.status.clone();
        self.status.set_hover_tip(None);

        let mut commands = Self::shortcut_commands(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                for (title, items) in MENUS {
                    let job = Self::mnemonic_job(ui, title);
                    ui.menu_button(job, |ui| {
                        self.render_menu_items(ui, items, &mut commands);
                    });
                }
            });
        });

        egui::TopBottomPanel::top("toolbars").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.toolbar_strip(ui, &[ToolbarId::File, ToolbarId::Edit], &mut commands);
            });
        });

        if self.toolbar_visible(ToolbarId::Help) {
            egui::SidePanel::left("help_toolbar")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.vertical(|ui| {
                        self.toolbar_strip(ui, &[ToolbarId::Help], &mut commands);
                    });
                });
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, &shown, now);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_central(ui, &mut commands);
        });

        if self.status.current(now) != shown.current(now) {
            self.repaint.mark_needs_repaint();
        }

        for command in commands {
            if self.run(command) == Outcome::Close {
                log::info!("exit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            self.repaint.mark_needs_repaint();
        }

        self.repaint.end_frame(ctx);
    }
}
