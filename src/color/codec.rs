//! Conversions between hex strings, RGB and HSL.

/// RGB triple with channels in `0.0..=255.0`.
///
/// Channels stay fractional after an HSL round-trip and are only rounded
/// when serialized by [`format_hex`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSL triple: hue in degrees, saturation and lightness in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    /// Channels rounded and clamped to bytes.
    pub fn to_u8(self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl { h, s, l }
    }

    pub fn with_hue(self, h: f64) -> Self {
        Hsl { h, ..self }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Hsl { l, ..self }
    }
}

/// Parse `#RRGGBB` or `#RGB`. The leading `#` is mandatory.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .ok()
            .map(f64::from)
    };
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Validate if a string is a hex color (`#RRGGBB` or `#RGB`).
pub fn is_valid_hex(input: &str) -> bool {
    parse_hex(input).is_some()
}

/// Canonical lowercase `#rrggbb` form of a valid hex input.
pub fn normalize_hex(input: &str) -> Option<String> {
    parse_hex(input).map(format_hex)
}

/// Serialize as lowercase `#rrggbb`, rounding each channel.
pub fn format_hex(rgb: Rgb) -> String {
    let (r, g, b) = rgb.to_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn to_byte(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s, l)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { s, l, .. } = hsl;
    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = normalize_hue(hsl.h) / 360.0;

    Rgb::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Wrap any hue into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate a hue by `degrees`, wrapping into `[0, 360)`.
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    normalize_hue(h + degrees)
}

/// YIQ-weighted luminance in `0..=255`; `0` for invalid input.
///
/// Callers compare against 128 to pick dark or light overlay text.
pub fn contrast_score(hex: &str) -> f64 {
    match parse_hex(hex) {
        Some(Rgb { r, g, b }) => (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() <= tolerance, "{a} vs {b}");
    }

    #[test]
    fn test_parse_hex_six_digits() {
        let rgb = parse_hex("#3b82f6").unwrap();
        assert_eq!(rgb, Rgb::new(59.0, 130.0, 246.0));
    }

    #[test]
    fn test_parse_hex_is_case_insensitive() {
        assert_eq!(parse_hex("#3B82F6"), parse_hex("#3b82f6"));
    }

    #[test]
    fn test_parse_hex_expands_shorthand() {
        assert_eq!(parse_hex("#abc"), parse_hex("#aabbcc"));
        assert_eq!(parse_hex("#f00").unwrap(), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for input in ["3b82f6", "#3b82f", "#3b82f6a", "#ggg", "#", "", "red", "#12 456", "＃abc"] {
            assert!(parse_hex(input).is_none(), "{input:?} should be invalid");
        }
    }

    #[test]
    fn test_format_hex_rounds_and_pads() {
        assert_eq!(format_hex(Rgb::new(0.0, 10.4, 254.6)), "#000aff");
        assert_eq!(format_hex(Rgb::new(-3.0, 300.0, 15.0)), "#00ff0f");
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("#3B82F6").as_deref(), Some("#3b82f6"));
        assert_eq!(normalize_hex("nope"), None);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let red = rgb_to_hsl(Rgb::new(255.0, 0.0, 0.0));
        assert_close(red.h, 0.0, 1e-9);
        assert_close(red.s, 1.0, 1e-9);
        assert_close(red.l, 0.5, 1e-9);

        let green = rgb_to_hsl(Rgb::new(0.0, 255.0, 0.0));
        assert_close(green.h, 120.0, 1e-9);

        let blue = rgb_to_hsl(Rgb::new(0.0, 0.0, 255.0));
        assert_close(blue.h, 240.0, 1e-9);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let gray = rgb_to_hsl(Rgb::new(128.0, 128.0, 128.0));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_close(gray.l, 128.0 / 255.0, 1e-9);
    }

    #[test]
    fn test_rgb_to_hsl_default_blue() {
        let hsl = rgb_to_hsl(parse_hex("#3b82f6").unwrap());
        assert_close(hsl.h, 217.2, 0.1);
        assert_close(hsl.s, 0.91, 0.01);
        assert_close(hsl.l, 0.598, 0.001);
    }

    #[test]
    fn test_hsl_to_rgb_gray_uses_lightness() {
        let rgb = hsl_to_rgb(Hsl::new(200.0, 0.0, 0.5));
        assert_eq!(rgb, Rgb::new(127.5, 127.5, 127.5));
    }

    #[test]
    fn test_hsl_to_rgb_normalizes_hue() {
        let a = hsl_to_rgb(Hsl::new(-120.0, 1.0, 0.5));
        let b = hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5));
        assert_eq!(format_hex(a), format_hex(b));
        assert_eq!(format_hex(hsl_to_rgb(Hsl::new(480.0, 1.0, 0.5))), "#00ff00");
    }

    #[test]
    fn test_round_trip_within_one_per_channel() {
        let channels = (0..=255u8).step_by(7).chain([255]);
        for r in channels.clone() {
            for g in channels.clone() {
                for b in channels.clone() {
                    let hex = format!("#{r:02x}{g:02x}{b:02x}");
                    let rgb = parse_hex(&hex).unwrap();
                    let back = parse_hex(&format_hex(hsl_to_rgb(rgb_to_hsl(rgb)))).unwrap();
                    assert_close(back.r, rgb.r, 1.0);
                    assert_close(back.g, rgb.g, 1.0);
                    assert_close(back.b, rgb.b, 1.0);
                }
            }
        }
    }

    #[test]
    fn test_rotate_hue_wraps() {
        assert_close(rotate_hue(350.0, 30.0), 20.0, 1e-9);
        assert_close(rotate_hue(10.0, -30.0), 340.0, 1e-9);
        assert_close(rotate_hue(180.0, 180.0), 0.0, 1e-9);
    }

    #[test]
    fn test_contrast_score() {
        assert_eq!(contrast_score("#ffffff"), 255.0);
        assert_eq!(contrast_score("#000000"), 0.0);
        assert_close(contrast_score("#ff0000"), 76.245, 1e-9);
        assert_eq!(contrast_score("invalid"), 0.0);
    }
}
