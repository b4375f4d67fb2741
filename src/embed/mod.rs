//! Embedded static resources.
//!
//! - `logo.svg` - vector logo written in place of an embedded raster image

/// Hand-authored replacement logo.
///
/// Every element inherits `currentColor`, so the logo follows the color of
/// whatever embeds it. The content never depends on the detected image.
pub const VECTOR_LOGO_SVG: &str = include_str!("logo.svg");
