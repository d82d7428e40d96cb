/// User settings: theme and color format persist, view mode does not.
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use rusqlite::Connection;
use swatchr::color::{ColorFormat, FormatParseError};
use thiserror::Error;

use crate::db;

pub const THEME_KEY: &str = "theme";
pub const COLOR_FORMAT_KEY: &str = "color_format";

/// Terminal width below which the carousel view is used on startup.
pub const CAROUSEL_MAX_WIDTH: u16 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown theme '{0}' (expected light, dark or system)")]
    UnknownTheme(String),
    #[error(transparent)]
    UnknownFormat(#[from] FormatParseError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Keep the terminal's own colors.
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn key(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(SettingsError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Every palette at once, two per row.
    Grid,
    /// One palette per page.
    Carousel,
}

impl ViewMode {
    pub fn for_width(columns: u16) -> Self {
        if columns < CAROUSEL_MAX_WIDTH {
            ViewMode::Carousel
        } else {
            ViewMode::Grid
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Carousel => "Carousel",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Carousel,
            ViewMode::Carousel => ViewMode::Grid,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme: ThemeMode,
    pub color_format: ColorFormat,
}

impl Settings {
    /// Loads stored settings. Missing or unreadable values fall back to
    /// their defaults.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(value) = db::query_setting(THEME_KEY, conn)? {
            match value.parse() {
                Ok(theme) => settings.theme = theme,
                Err(err) => log::warn!("ignoring stored theme: {err}"),
            }
        }
        if let Some(value) = db::query_setting(COLOR_FORMAT_KEY, conn)? {
            match value.parse::<ColorFormat>() {
                Ok(format) => settings.color_format = format,
                Err(err) => log::warn!("ignoring stored color format: {err}"),
            }
        }
        Ok(settings)
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        db::upsert_setting(THEME_KEY, self.theme.key(), conn)?;
        db::upsert_setting(COLOR_FORMAT_KEY, self.color_format.key(), conn)?;
        log::debug!(
            "saved settings theme={} color_format={}",
            self.theme,
            self.color_format
        );
        Ok(())
    }
}
