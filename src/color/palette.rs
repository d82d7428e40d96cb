//! Harmony rules that derive palettes from a base color.

use super::codec::{Hsl, format_hex, hsl_to_rgb, parse_hex, rgb_to_hsl, rotate_hue};

/// Lightness change between consecutive shade/tint steps.
pub const LIGHTNESS_STEP: f64 = 0.15;

const SHADE_TINT_COUNT: usize = 4;

/// One named set of related colors. Color order is render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub description: String,
    pub colors: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Complementary,
    Triadic,
    Analogous,
    Shades,
    Tints,
    Tetradic,
}

impl PaletteKind {
    /// Generation order.
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Complementary,
        PaletteKind::Triadic,
        PaletteKind::Analogous,
        PaletteKind::Shades,
        PaletteKind::Tints,
        PaletteKind::Tetradic,
    ];

    /// Order palettes are shown in.
    pub const DISPLAY_ORDER: [PaletteKind; 6] = [
        PaletteKind::Complementary,
        PaletteKind::Analogous,
        PaletteKind::Triadic,
        PaletteKind::Tetradic,
        PaletteKind::Shades,
        PaletteKind::Tints,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaletteKind::Complementary => "補色 (Complementary)",
            PaletteKind::Triadic => "トライアド (Triadic)",
            PaletteKind::Analogous => "類似色 (Analogous)",
            PaletteKind::Shades => "シェード (Shades)",
            PaletteKind::Tints => "ティント (Tints)",
            PaletteKind::Tetradic => "テトラード (Tetradic)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaletteKind::Complementary => {
                "色相環の反対側に位置する色。強いコントラストが生まれます。"
            }
            PaletteKind::Triadic => "色相環を3等分する位置にある3色。バランスの取れた配色です。",
            PaletteKind::Analogous => "色相環で隣り合う色。統一感があり、目に優しい配色です。",
            PaletteKind::Shades => "ベースの色に黒を混ぜた色。深みと重厚感を与えます。",
            PaletteKind::Tints => "ベースの色に白を混ぜた色。明るく軽やかな印象を与えます。",
            PaletteKind::Tetradic => "色相環で長方形を形成する4色。豊かで多様な表現が可能です。",
        }
    }

    /// Kind whose label is exactly `label`.
    pub fn from_label(label: &str) -> Option<PaletteKind> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Number of colors this rule always produces.
    pub fn color_count(self) -> usize {
        match self {
            PaletteKind::Complementary => 2,
            PaletteKind::Triadic | PaletteKind::Analogous => 3,
            PaletteKind::Shades | PaletteKind::Tints | PaletteKind::Tetradic => 4,
        }
    }

    fn colors(self, base_hex: &str, base: Hsl) -> Vec<String> {
        let rotated = |degrees: f64| hsl_hex(base.with_hue(rotate_hue(base.h, degrees)));
        match self {
            PaletteKind::Complementary => vec![base_hex.to_string(), rotated(180.0)],
            PaletteKind::Triadic => vec![base_hex.to_string(), rotated(120.0), rotated(240.0)],
            PaletteKind::Analogous => vec![rotated(-30.0), base_hex.to_string(), rotated(30.0)],
            PaletteKind::Tetradic => vec![
                base_hex.to_string(),
                rotated(90.0),
                rotated(180.0),
                rotated(270.0),
            ],
            PaletteKind::Shades => (0..SHADE_TINT_COUNT)
                .map(|i| {
                    let l = (base.l - i as f64 * LIGHTNESS_STEP).max(0.0);
                    hsl_hex(base.with_lightness(l))
                })
                .collect(),
            PaletteKind::Tints => (0..SHADE_TINT_COUNT)
                .map(|i| {
                    let l = (base.l + i as f64 * LIGHTNESS_STEP).min(1.0);
                    hsl_hex(base.with_lightness(l))
                })
                .collect(),
        }
    }
}

fn hsl_hex(hsl: Hsl) -> String {
    format_hex(hsl_to_rgb(hsl))
}

/// Build every palette for `base`, in generation order.
///
/// Returns an empty list when `base` is not a valid hex color. The base
/// entries carry the canonical lowercase `#rrggbb` form of the input.
pub fn generate_palettes(base: &str) -> Vec<Palette> {
    let Some(rgb) = parse_hex(base) else {
        log::debug!("not generating palettes for invalid base {base:?}");
        return Vec::new();
    };
    let base_hex = format_hex(rgb);
    let hsl = rgb_to_hsl(rgb);

    PaletteKind::ALL
        .into_iter()
        .map(|kind| Palette {
            name: kind.label().to_string(),
            description: kind.description().to_string(),
            colors: kind.colors(&base_hex, hsl),
        })
        .collect()
}

/// Position of a palette name in [`PaletteKind::DISPLAY_ORDER`].
pub fn display_rank(name: &str) -> Option<usize> {
    PaletteKind::DISPLAY_ORDER
        .iter()
        .position(|kind| kind.label() == name)
}

/// Sort palettes into display order.
///
/// Names outside the known categories come first, keeping their relative
/// order; `None` ranks below every `Some`.
pub fn sort_for_display(palettes: &mut [Palette]) {
    palettes.sort_by_key(|palette| display_rank(&palette.name));
}
