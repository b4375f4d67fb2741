//! Output path derivation.
//!
//! A suffix goes between the file stem and its last extension:
//! `art/logo.svg` + `-colorless` -> `art/logo-colorless.svg`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix for the color-stripped output.
pub const COLORLESS_SUFFIX: &str = "-colorless";

/// Suffix for the replacement vector logo.
pub const VECTOR_SUFFIX: &str = "-vector";

/// Insert `suffix` before the last extension, keeping the directory.
///
/// # Examples
///
/// - `with_stem_suffix("a/b.svg", "-x")` -> `a/b-x.svg`
/// - `with_stem_suffix("b", "-x")` -> `b-x`
/// - `with_stem_suffix("a/b.min.svg", "-x")` -> `a/b.min-x.svg`
/// - `with_stem_suffix("b.", "-x")` -> `b.-x` (a trailing dot is no extension)
pub fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let (stem, ext) = match path.extension() {
        Some(ext) if !ext.is_empty() => (path.file_stem(), Some(ext)),
        _ => (path.file_name(), None),
    };

    let mut name = OsString::new();
    if let Some(stem) = stem {
        name.push(stem);
    }
    name.push(suffix);
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }

    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Default primary output for an input file.
#[inline]
pub fn colorless_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, COLORLESS_SUFFIX)
}

/// Sibling path for the vector logo, derived from the primary output.
#[inline]
pub fn vector_path(output: &Path) -> PathBuf {
    with_stem_suffix(output, VECTOR_SUFFIX)
}
