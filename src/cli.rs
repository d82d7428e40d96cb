/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::style::{Color, Stylize};
use rusqlite::Connection;
use swatchr::color::{self, ColorFormat, Palette};

use crate::db;
use crate::settings::{Settings, ThemeMode};
use crate::ui::TextTone;

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal-based color palette generator"
)]
pub struct Cli {
    /// Starting color for the interactive view (HEX code or color name)
    #[arg(short = 'c', long = "color")]
    pub color: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every palette for a HEX code or color name
    Generate {
        color: String,
        #[arg(short = 'f', long = "format")]
        format: Option<ColorFormat>,
    },
    /// Resolve a color name or HEX code to #rrggbb
    Resolve { text: String },
    /// Print the contrast score of a HEX color
    Contrast { hex: String },
    /// Print palettes for a random base color
    Random {
        #[arg(short = 'f', long = "format")]
        format: Option<ColorFormat>,
    },
    /// Show or change stored settings
    Settings {
        #[arg(long = "theme")]
        theme: Option<ThemeMode>,
        #[arg(short = 'f', long = "format")]
        format: Option<ColorFormat>,
    },
}

/// Execute a CLI command.
pub fn run(command: Command, conn: &Connection) -> Result<()> {
    match command {
        Command::Generate { color, format } => handle_generate(color, format, conn)?,
        Command::Resolve { text } => handle_resolve(text),
        Command::Contrast { hex } => handle_contrast(hex),
        Command::Random { format } => {
            let base = color::random_hex();
            print_palettes(&base, resolve_format(format, conn)?);
        }
        Command::Settings { theme, format } => handle_settings(theme, format, conn)?,
    }
    Ok(())
}

fn handle_generate(text: String, format: Option<ColorFormat>, conn: &Connection) -> Result<()> {
    let Some(base) = color::resolve_color(&text) else {
        println!("'{text}' is not a HEX code or known color name.");
        return Ok(());
    };
    print_palettes(&base, resolve_format(format, conn)?);
    Ok(())
}

fn handle_resolve(text: String) {
    match color::resolve_color(&text) {
        Some(hex) => println!("{hex}"),
        None => println!("No color found for '{text}'."),
    }
}

fn handle_contrast(hex: String) {
    if !color::is_valid_hex(&hex) {
        println!("'{hex}' is not a valid HEX color. Use #RRGGBB or #RGB.");
        return;
    }
    let score = color::contrast_score(&hex);
    let tone = TextTone::for_background(&hex);
    println!("{score:.1} ({} text)", tone.key());
}

fn handle_settings(
    theme: Option<ThemeMode>,
    format: Option<ColorFormat>,
    conn: &Connection,
) -> Result<()> {
    let mut settings = Settings::load(conn)?;
    if theme.is_some() || format.is_some() {
        if let Some(theme) = theme {
            settings.theme = theme;
        }
        if let Some(format) = format {
            settings.color_format = format;
        }
        settings.save(conn)?;
    }
    println!("theme: {}", settings.theme);
    println!("color_format: {}", settings.color_format);
    if db::query_settings(conn)?.is_empty() {
        println!("(nothing stored yet, using defaults)");
    }
    Ok(())
}

fn resolve_format(format: Option<ColorFormat>, conn: &Connection) -> Result<ColorFormat> {
    match format {
        Some(format) => Ok(format),
        None => Ok(Settings::load(conn)?.color_format),
    }
}

fn print_palettes(base: &str, format: ColorFormat) {
    println!("Base color: {}", swatch(base, format));
    for palette in color::display_palettes(base) {
        println!();
        print_palette(&palette, format);
    }
}

fn print_palette(palette: &Palette, format: ColorFormat) {
    println!("{}", palette.name.as_str().bold());
    println!("  {}", palette.description.as_str().dim());
    let swatches = palette
        .colors
        .iter()
        .map(|hex| swatch(hex, format))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {swatches}");
}

/// The color's text on its own background.
fn swatch(hex: &str, format: ColorFormat) -> String {
    let text = format.render(hex).unwrap_or_else(|| hex.to_string());
    let Some(rgb) = color::parse_hex(hex) else {
        return text;
    };
    let (r, g, b) = rgb.to_u8();
    let foreground = match TextTone::for_background(hex) {
        TextTone::Dark => Color::Rgb { r: 30, g: 41, b: 59 },
        TextTone::Light => Color::White,
    };
    format!(" {text} ")
        .with(foreground)
        .on(Color::Rgb { r, g, b })
        .to_string()
}
