use crate::types::frame::FrameRecord;
use std::fmt;

/// Non-fatal observation made while decoding a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `total-io` differs from the number of entries in the five groups
    IoCountMismatch {
        record: usize,
        declared: u16,
        actual: usize,
    },
    /// Header and footer record counts disagree
    RecordCountEchoMismatch { header: u8, footer: u8 },
    /// `field-length` differs from the bytes actually covered
    FieldLengthMismatch { declared: u32, actual: usize },
    /// Codec id is neither 0x08 nor 0x8E
    UnexpectedCodec(u8),
    /// Bytes left after the footer
    TrailingBytes(usize),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IoCountMismatch {
                record,
                declared,
                actual,
            } => write!(
                f,
                "record {}: total-io declares {} entries, groups hold {}",
                record, declared, actual
            ),
            Diagnostic::RecordCountEchoMismatch { header, footer } => write!(
                f,
                "record count {} in header, {} in footer",
                header, footer
            ),
            Diagnostic::FieldLengthMismatch { declared, actual } => write!(
                f,
                "field-length declares {} bytes, frame covers {}",
                declared, actual
            ),
            Diagnostic::UnexpectedCodec(codec) => write!(f, "unexpected codec id 0x{:02x}", codec),
            Diagnostic::TrailingBytes(count) => {
                write!(f, "{} trailing bytes after the checksum", count)
            }
        }
    }
}

/// Decoded frame plus what the decoder noticed along the way
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub frame: FrameRecord,
    /// Bytes consumed from the start of the buffer through the checksum
    pub consumed: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
