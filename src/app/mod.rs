mod clipboard;
mod state;

use crossterm::event::KeyEvent;

pub use clipboard::{Clipboard, SystemClipboard};
pub use state::{App, SettingsPopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    Key(KeyEvent),
}

/// Which part of the screen receives plain key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    Input,
    Palettes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Theme,
    View,
    Format,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::Theme => SettingsField::View,
            SettingsField::View => SettingsField::Format,
            SettingsField::Format => SettingsField::Theme,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}
