//! Top-level error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum DecolorError {
    #[error("input file '{}' not found", .0.display())]
    MissingInput(PathBuf),

    // NOTE: No #[from] here - the message already carries the whole context chain
    #[error("error processing SVG: {0:#}")]
    Processing(anyhow::Error),
}

impl DecolorError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingInput(_) | Self::Processing(_) => 1,
        }
    }
}
