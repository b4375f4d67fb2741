//! SVG text processing.
//!
//! Everything here works on raw text. No markup tree is built.
//!
//! # Modules
//!
//! - [`embedded`]: detect a base64 PNG data URI
//! - [`strip`]: replace explicit colors with `currentColor`

pub mod embedded;
pub mod strip;

pub use embedded::find_embedded_png;
pub use strip::{strip_colors, strip_colors_with_stats};
