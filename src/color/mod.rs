//! Color engine: hex/RGB/HSL codec, name lookup and palette generation.
//!
//! Every operation is pure. Invalid input never errors; it yields `None`,
//! an empty list or a zero score.
pub mod codec;
pub mod format;
pub mod names;
pub mod palette;

use rand::RngExt;

pub use codec::{
    Hsl, Rgb, contrast_score, format_hex, hsl_to_rgb, is_valid_hex, normalize_hex, parse_hex,
    rgb_to_hsl, rotate_hue,
};
pub use format::{ColorFormat, FormatParseError};
pub use names::lookup_name;
pub use palette::{Palette, PaletteKind, display_rank, generate_palettes, sort_for_display};

/// Base color shown before the user picks one.
pub const DEFAULT_BASE_COLOR: &str = "#3b82f6";

/// Resolve free text to a canonical `#rrggbb`.
///
/// Valid hex wins; otherwise the text is looked up as a color name.
pub fn resolve_color(text: &str) -> Option<String> {
    normalize_hex(text).or_else(|| lookup_name(text).map(str::to_string))
}

/// Generate palettes and sort them into display order.
pub fn display_palettes(base: &str) -> Vec<Palette> {
    let mut palettes = generate_palettes(base);
    sort_for_display(&mut palettes);
    palettes
}

/// Generate a random base color.
pub fn random_hex() -> String {
    let mut rng = rand::rng();
    let rgb = Rgb::new(
        f64::from(rng.random_range(0..=255u8)),
        f64::from(rng.random_range(0..=255u8)),
        f64::from(rng.random_range(0..=255u8)),
    );
    format_hex(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color_names() {
        assert_eq!(resolve_color("RED").as_deref(), Some("#ff0000"));
        assert_eq!(resolve_color(" red ").as_deref(), Some("#ff0000"));
        assert_eq!(resolve_color("赤").as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_resolve_color_hex_is_normalized() {
        assert_eq!(resolve_color("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(resolve_color("#3B82F6").as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_resolve_color_unknown() {
        assert_eq!(resolve_color("not-a-color"), None);
        assert_eq!(resolve_color("3b82f6"), None);
        assert_eq!(resolve_color("#3b82f"), None);
    }

    #[test]
    fn test_display_palettes_sorted() {
        let palettes = display_palettes(DEFAULT_BASE_COLOR);
        assert_eq!(palettes.len(), 6);
        assert_eq!(palettes[0].name, PaletteKind::Complementary.label());
        assert_eq!(palettes[5].name, PaletteKind::Tints.label());
        assert!(display_palettes("nope").is_empty());
    }

    #[test]
    fn test_random_hex_is_valid() {
        for _ in 0..32 {
            let hex = random_hex();
            assert_eq!(normalize_hex(&hex).as_deref(), Some(hex.as_str()));
        }
    }
}
