use ratatui::style::Color;

use crate::settings::ThemeMode;

/// Chrome colors for the selected theme. Palette swatches always use their
/// own colors.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Screen background; `Reset` keeps the terminal's own.
    pub fn background(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Rgb(248, 250, 252),
            ThemeMode::Dark => Color::Rgb(15, 23, 42),
            ThemeMode::System => Color::Reset,
        }
    }

    /// Normal text
    pub fn text(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Rgb(30, 41, 59),
            ThemeMode::Dark => Color::Rgb(226, 232, 240),
            ThemeMode::System => Color::Reset,
        }
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Rgb(100, 116, 139),
            ThemeMode::Dark => Color::Rgb(148, 163, 184),
            ThemeMode::System => Color::DarkGray,
        }
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        Color::Rgb(59, 130, 246)
    }

    /// Secondary/border color
    pub fn secondary(&self) -> Color {
        match self.mode {
            ThemeMode::System => Color::Cyan,
            _ => Color::Rgb(45, 212, 191),
        }
    }

    /// Focused element
    pub fn highlight(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Rgb(37, 99, 235),
            ThemeMode::Dark => Color::Rgb(96, 165, 250),
            ThemeMode::System => Color::LightBlue,
        }
    }

    /// Section titles
    pub fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::System => Color::Magenta,
            _ => Color::Rgb(168, 85, 247),
        }
    }

    /// Confirmation messages
    pub fn success(&self) -> Color {
        Color::Green
    }

    /// Input that is not a color yet
    pub fn warn(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Rgb(180, 83, 9),
            _ => Color::Yellow,
        }
    }
}
