//! Protocol-level errors.

use thiserror::Error;

/// Errors that can arise when decoding engine buffers or encoding
/// responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Buffer ended before the expected fields.
    #[error("buffer truncated: needed {needed} bytes, {remaining} left")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A response value outside its legal range.
    #[error("invalid response: {0}")]
    InvalidResponse(&'static str),
}
