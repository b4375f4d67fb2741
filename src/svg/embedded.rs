//! Embedded PNG detection.
//!
//! Looks for the first `data:image/png;base64,` URI in the source text.
//! The payload is decoded only to report its size.

use base64::{
    DecodeError, Engine,
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use regex::Regex;
use std::sync::LazyLock;

static RE_PNG_DATA_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data:image/png;base64,([A-Za-z0-9+/=]+)").unwrap());

/// Standard alphabet, padding required, non-zero trailing bits accepted.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// A base64 PNG payload found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedPng<'a> {
    payload: &'a str,
}

impl<'a> EmbeddedPng<'a> {
    /// The raw base64 text after the `base64,` marker.
    pub const fn payload(&self) -> &'a str {
        self.payload
    }

    /// Decoded size in bytes.
    pub fn decoded_len(&self) -> Result<usize, DecodeError> {
        LENIENT
            .decode(normalize_padding(self.payload))
            .map(|bytes| bytes.len())
    }
}

/// Tidy stray `=` the way a non-strict decoder reads them.
///
/// A `=` before the second symbol of a quad is skipped. Once padding
/// completes a quad, everything after it is ignored. Anything else is
/// left for the decoder to reject.
fn normalize_padding(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut quad_pos = 0;
    let mut pads = 0;

    for c in payload.chars() {
        if c == '=' {
            if quad_pos >= 2 {
                pads += 1;
                if quad_pos + pads >= 4 {
                    out.extend(std::iter::repeat_n('=', 4 - quad_pos));
                    break;
                }
            }
            continue;
        }
        pads = 0;
        quad_pos = (quad_pos + 1) % 4;
        out.push(c);
    }

    out
}

/// Find the first embedded PNG data URI, if any.
pub fn find_embedded_png(text: &str) -> Option<EmbeddedPng<'_>> {
    RE_PNG_DATA_URI
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| EmbeddedPng {
            payload: m.as_str(),
        })
}

/// Log what was found. Decode failures are reported, never returned.
pub fn report(image: &EmbeddedPng<'_>) {
    crate::log!("image"; "found embedded base64 image");
    crate::debug!("image"; "payload: {} base64 chars", image.payload().len());
    match image.decoded_len() {
        Ok(len) => crate::log!("image"; "base64 image data size: {} bytes", len),
        Err(e) => crate::log!("image"; "error analyzing image: {}", e),
    }
}
