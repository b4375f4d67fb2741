//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`suffix`]: output path derivation (`colorless_path`, `vector_path`)

pub mod suffix;

pub use suffix::{colorless_path, vector_path};
