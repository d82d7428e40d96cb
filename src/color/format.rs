//! Text rendering of a color as hex, rgb() or hsl().

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::codec::{format_hex, parse_hex, rgb_to_hsl};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color format '{0}' (expected hex, rgb or hsl)")]
pub struct FormatParseError(pub String);

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    /// Stable key used on the command line and in stored settings.
    pub fn key(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }

    /// Label with an example, for settings menus.
    pub fn example_label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX (#123456)",
            ColorFormat::Rgb => "RGB (18, 52, 86)",
            ColorFormat::Hsl => "HSL (210, 65%, 20%)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ColorFormat::Hex => ColorFormat::Rgb,
            ColorFormat::Rgb => ColorFormat::Hsl,
            ColorFormat::Hsl => ColorFormat::Hex,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }

    /// Render a hex color in this format. `None` if `hex` is invalid.
    pub fn render(self, hex: &str) -> Option<String> {
        let rgb = parse_hex(hex)?;
        let text = match self {
            ColorFormat::Hex => format_hex(rgb),
            ColorFormat::Rgb => {
                let (r, g, b) = rgb.to_u8();
                format!("rgb({r}, {g}, {b})")
            }
            ColorFormat::Hsl => {
                let hsl = rgb_to_hsl(rgb);
                let h = hsl.h.round() as u32 % 360;
                let s = (hsl.s * 100.0).round() as u32;
                let l = (hsl.l * 100.0).round() as u32;
                format!("hsl({h}, {s}%, {l}%)")
            }
        };
        Some(text)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_format() {
        assert_eq!(ColorFormat::Hex.render("#3B82F6").as_deref(), Some("#3b82f6"));
        assert_eq!(
            ColorFormat::Rgb.render("#3b82f6").as_deref(),
            Some("rgb(59, 130, 246)")
        );
        assert_eq!(
            ColorFormat::Hsl.render("#3b82f6").as_deref(),
            Some("hsl(217, 91%, 60%)")
        );
        assert_eq!(
            ColorFormat::Hsl.render("#fff").as_deref(),
            Some("hsl(0, 0%, 100%)")
        );
    }

    #[test]
    fn test_render_wraps_hue_rounding_to_360() {
        // hue ~359.6 rounds to 360 and must print as 0
        assert_eq!(
            ColorFormat::Hsl.render("#ff0002").as_deref(),
            Some("hsl(0, 100%, 50%)")
        );
    }

    #[test]
    fn test_render_invalid() {
        for format in ColorFormat::ALL {
            assert_eq!(format.render("blue"), None);
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("HSL".parse::<ColorFormat>(), Ok(ColorFormat::Hsl));
        assert_eq!(" rgb ".parse::<ColorFormat>(), Ok(ColorFormat::Rgb));
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(FormatParseError("cmyk".to_string()))
        );
        for format in ColorFormat::ALL {
            assert_eq!(format.key().parse::<ColorFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(ColorFormat::Hex.next(), ColorFormat::Rgb);
        assert_eq!(ColorFormat::Hsl.next(), ColorFormat::Hex);
        assert_eq!(ColorFormat::Hex.prev(), ColorFormat::Hsl);
    }
}
