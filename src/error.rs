use thiserror::Error;

/// Errors that abort decoding of a single AVL frame.
///
/// No partial frame is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Buffer is shorter than the minimum header size
    #[error("invalid frame length: expected at least {minimum} bytes, got {actual}")]
    InvalidLength { actual: usize, minimum: usize },
    /// A field read would run past the end of the buffer
    #[error(
        "truncated frame: needed {needed} bytes at offset {offset}, only {available} available"
    )]
    TruncatedFrame {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Device identity bytes are not ASCII text
    #[error("invalid encoding: device identity is not ASCII ({bytes})")]
    InvalidEncoding { bytes: String },
    /// Hex text handed to `decode_hex` could not be turned into bytes
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
