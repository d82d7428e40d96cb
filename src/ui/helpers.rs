use ratatui::style::Color;
use swatchr::color::{contrast_score, parse_hex};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Scores above this get dark text, the rest light text.
pub const CONTRAST_THRESHOLD: f64 = 128.0;

/// Text color that stays readable on top of a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTone {
    Dark,
    Light,
}

impl TextTone {
    pub fn for_background(hex: &str) -> Self {
        if contrast_score(hex) > CONTRAST_THRESHOLD {
            TextTone::Dark
        } else {
            TextTone::Light
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TextTone::Dark => "dark",
            TextTone::Light => "light",
        }
    }

    pub fn color(self) -> Color {
        match self {
            TextTone::Dark => Color::Rgb(30, 41, 59),
            TextTone::Light => Color::White,
        }
    }
}

/// Shorten `value` to at most `width` terminal columns, marking the cut
/// with `..`. Wide characters count as two columns.
pub fn clamp_text(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let budget = if width <= 2 { width } else { width - 2 };
    let mut trimmed = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        trimmed.push(ch);
    }
    if width > 2 {
        trimmed.push_str("..");
    }
    trimmed
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let (r, g, b) = parse_hex(value.trim())?.to_u8();
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_tone_threshold() {
        assert_eq!(TextTone::for_background("#ffffff"), TextTone::Dark);
        assert_eq!(TextTone::for_background("#000000"), TextTone::Light);
        // exactly 128 is not above the threshold
        assert_eq!(TextTone::for_background("#808080"), TextTone::Light);
        assert_eq!(TextTone::for_background("#818181"), TextTone::Dark);
        assert_eq!(TextTone::for_background("bogus"), TextTone::Light);
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#abc"), Some(Color::Rgb(170, 187, 204)));
        assert_eq!(hex_to_color(" #3b82f6 "), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(hex_to_color("3b82f6"), None);
    }

    #[test]
    fn test_clamp_text() {
        assert_eq!(clamp_text("補色 (Complementary)", 40), "補色 (Complementary)");
        assert_eq!(clamp_text("rgb(59, 130, 246)", 8), "rgb(59..");
        assert_eq!(clamp_text("#3b82f6", 2), "#3");
        assert_eq!(clamp_text("#3b82f6", 0), "");
    }

    #[test]
    fn test_clamp_text_counts_wide_chars() {
        let description = "色相環の反対側に位置する色。強いコントラストが生まれます。";
        assert_eq!(description.chars().count(), 29);

        let clamped = clamp_text(description, 48);
        assert!(clamped.ends_with(".."));
        assert!(clamped.width() <= 48);
        assert_eq!(clamped, "色相環の反対側に位置する色。強いコントラストが..");

        // a wide char that would straddle the limit is dropped
        assert_eq!(clamp_text("補色補色", 5), "補..");
        assert_eq!(clamp_text("補色", 4), "補色");
        assert_eq!(clamp_text("補色", 3), "..");
        assert_eq!(clamp_text("補色", 2), "補");
    }
}
