//! Swatchr color engine.
//!
//! Resolves a hex code or color name to a base color and derives harmonic
//! palettes from it. The `swatchr` binary renders these in a terminal UI.
pub mod color;

pub use color::{Palette, contrast_score, generate_palettes, resolve_color};
