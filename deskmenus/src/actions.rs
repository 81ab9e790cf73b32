//! Actions and the menus, toolbars and context menu built from them.
//!
//! Every entry the user can trigger is an [`ActionId`]. Menus, toolbars and
//! the context menu are plain tables of ids, so one action is shared by all
//! the places it appears.

use egui::{Event, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    New,
    Open,
    Save,
    Exit,
    Copy,
    Paste,
    Cut,
    Find,
    Replace,
    HelpContent,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl (Cmd on macOS) plus a key.
    Command(Key),
    /// A key without modifiers.
    Plain(Key),
    // egui turns Ctrl+C/X/V into these events before apps see the keys.
    Copy,
    Cut,
    Paste,
}

impl Shortcut {
    pub fn label(self) -> String {
        match self {
            Shortcut::Command(key) => format!("Ctrl+{}", key.name()),
            Shortcut::Plain(key) => key.name().to_string(),
            Shortcut::Copy => "Ctrl+C".into(),
            Shortcut::Cut => "Ctrl+X".into(),
            Shortcut::Paste => "Ctrl+V".into(),
        }
    }

    pub fn matches(self, event: &Event) -> bool {
        match (self, event) {
            (Shortcut::Command(k), Event::Key { key, pressed: true, modifiers, .. }) => {
                *key == k && modifiers.command && !modifiers.alt && !modifiers.shift
            }
            (Shortcut::Plain(k), Event::Key { key, pressed: true, modifiers, .. }) => {
                *key == k && modifiers.is_none()
            }
            (Shortcut::Copy, Event::Copy)
            | (Shortcut::Cut, Event::Cut)
            | (Shortcut::Paste, Event::Paste(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct Action {
    pub id: ActionId,
    /// Menu text; `&` marks the access letter, `&&` is a literal ampersand.
    pub text: &'static str,
    /// Where the action lives, as shown on the central label.
    pub trail: &'static str,
    pub shortcut: Option<Shortcut>,
    pub tip: &'static str,
}

pub const ACTIONS: &[Action] = &[
    Action {
        id: ActionId::New,
        text: "&New",
        trail: "File > New",
        shortcut: Some(Shortcut::Command(Key::N)),
        tip: "Create a new file",
    },
    Action {
        id: ActionId::Open,
        text: "&Open...",
        trail: "File > Open...",
        shortcut: Some(Shortcut::Command(Key::O)),
        tip: "Open an existing file",
    },
    Action {
        id: ActionId::Save,
        text: "&Save",
        trail: "File > Save",
        shortcut: Some(Shortcut::Command(Key::S)),
        tip: "Save the current file",
    },
    Action {
        id: ActionId::Exit,
        text: "&Exit",
        trail: "File > Exit",
        shortcut: None,
        tip: "Close the application",
    },
    Action {
        id: ActionId::Copy,
        text: "&Copy",
        trail: "Edit > Copy",
        shortcut: Some(Shortcut::Copy),
        tip: "Copy the selection",
    },
    Action {
        id: ActionId::Paste,
        text: "&Paste",
        trail: "Edit > Paste",
        shortcut: Some(Shortcut::Paste),
        tip: "Paste from the clipboard",
    },
    Action {
        id: ActionId::Cut,
        text: "C&ut",
        trail: "Edit > Cut",
        shortcut: Some(Shortcut::Cut),
        tip: "Cut the selection",
    },
    Action {
        id: ActionId::Find,
        text: "&Find...",
        trail: "Edit > Find and Replace > Find...",
        shortcut: None,
        tip: "Find some content",
    },
    Action {
        id: ActionId::Replace,
        text: "&Replace...",
        trail: "Edit > Find and Replace > Replace...",
        shortcut: None,
        tip: "Find and replace content",
    },
    Action {
        id: ActionId::HelpContent,
        text: "&Help Content",
        trail: "Help > Help Content...",
        shortcut: Some(Shortcut::Plain(Key::F1)),
        tip: "Show the help manual",
    },
    Action {
        id: ActionId::About,
        text: "&About",
        trail: "Help > About...",
        shortcut: None,
        tip: "About this application",
    },
];

impl ActionId {
    pub fn action(self) -> &'static Action {
        // every id has exactly one table row (checked in tests)
        ACTIONS
            .iter()
            .find(|a| a.id == self)
            .unwrap_or(&ACTIONS[0])
    }
}

#[derive(Debug)]
pub enum MenuItem {
    Action(ActionId),
    Separator,
    Submenu(&'static str, &'static [MenuItem]),
    /// Filled with recent file names every time it opens.
    OpenRecent,
}

pub const MENUS: &[(&str, &[MenuItem])] = &[
    (
        "&File",
        &[
            MenuItem::Action(ActionId::New),
            MenuItem::Action(ActionId::Open),
            MenuItem::OpenRecent,
            MenuItem::Action(ActionId::Save),
            MenuItem::Separator,
            MenuItem::Action(ActionId::Exit),
        ],
    ),
    (
        "&Edit",
        &[
            MenuItem::Action(ActionId::Copy),
            MenuItem::Action(ActionId::Paste),
            MenuItem::Action(ActionId::Cut),
            MenuItem::Separator,
            MenuItem::Submenu(
                "Find and Replace",
                &[MenuItem::Action(ActionId::Find), MenuItem::Action(ActionId::Replace)],
            ),
        ],
    ),
    (
        "&Help",
        &[MenuItem::Action(ActionId::HelpContent), MenuItem::Action(ActionId::About)],
    ),
];

pub const CONTEXT_MENU: &[MenuItem] = &[
    MenuItem::Action(ActionId::New),
    MenuItem::Action(ActionId::Open),
    MenuItem::Action(ActionId::Save),
    MenuItem::Separator,
    MenuItem::Action(ActionId::Copy),
    MenuItem::Action(ActionId::Paste),
    MenuItem::Action(ActionId::Cut),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarId {
    File,
    Edit,
    Help,
}

#[derive(Debug)]
pub enum ToolItem {
    Action(ActionId),
    Separator,
    FontSize,
}

#[derive(Debug)]
pub struct Toolbar {
    pub id: ToolbarId,
    pub title: &'static str,
    pub items: &'static [ToolItem],
}

pub const TOOLBARS: [Toolbar; 3] = [
    Toolbar {
        id: ToolbarId::File,
        title: "File",
        items: &[
            ToolItem::Action(ActionId::New),
            ToolItem::Action(ActionId::Open),
            ToolItem::Action(ActionId::Save),
        ],
    },
    Toolbar {
        id: ToolbarId::Edit,
        title: "Edit",
        items: &[
            ToolItem::Action(ActionId::Copy),
            ToolItem::Action(ActionId::Paste),
            ToolItem::Action(ActionId::Cut),
            ToolItem::Separator,
            ToolItem::FontSize,
        ],
    },
    Toolbar {
        id: ToolbarId::Help,
        title: "Help",
        items: &[ToolItem::Action(ActionId::HelpContent)],
    },
];

/// Split menu text into the displayed text and the byte index of the
/// access letter in it, if any.
pub fn parse_mnemonic(text: &str) -> (String, Option<usize>) {
    let mut out = String::with_capacity(text.len());
    let mut access = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
                out.push('&');
            }
            Some(_) if access.is_none() => access = Some(out.len()),
            _ => {}
        }
    }
    (out, access)
}

/// Access letter of a menu entry, lowercased.
pub fn access_letter(text: &str) -> Option<char> {
    let (display, index) = parse_mnemonic(text);
    display[index?..].chars().next().map(|c| c.to_ascii_lowercase())
}

/// Placeholder names listed under "Open Recent".
pub fn recent_files(count: usize) -> Vec<String> {
    (0..count).map(|n| format!("File-{n}")).collect()
}

/// Words in `text`, ignoring tokens with no letters or digits such as `>`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}
