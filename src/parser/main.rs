use crate::error::DecodeResult;
use crate::parser::footer::parse_footer;
use crate::parser::header::parse_header;
use crate::parser::record::parse_records;
use crate::parser::schema::{FIELD_LENGTH_OFFSET, FOOTER_LEN};
use crate::parser::stream::AvlCursor;
use crate::types::*;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, warn};

/// Codec ids whose IO layout this decoder understands
pub const KNOWN_CODECS: [u8; 2] = [0x08, 0x8E];

/// Decode an AVL frame
pub fn decode(data: &[u8]) -> DecodeResult<FrameRecord> {
    decode_report(data).map(|report| report.frame)
}

/// Decode an AVL frame given as hex text
pub fn decode_hex(hex_data: &str) -> DecodeResult<FrameRecord> {
    let data = hex::decode(hex_data.trim())?;
    decode(&data)
}

/// Decode an AVL frame, keeping the consumed length and any diagnostics
///
/// Diagnostics never turn a successful decode into a failure.
pub fn decode_report(data: &[u8]) -> DecodeResult<DecodeReport> {
    let mut cursor = AvlCursor::new(data);

    let header = parse_header(&mut cursor)?;
    let records = parse_records(&mut cursor, header.record_count)?;
    let footer = parse_footer(&mut cursor)?;

    let consumed = cursor.position();
    let frame = FrameRecord {
        imei: header.imei,
        field_length: header.field_length,
        codec_id: [header.codec_id],
        record_count: header.record_count,
        records,
        record_count_echo: footer.record_count_echo,
        checksum: footer.checksum,
    };

    let diagnostics = collect_diagnostics(&frame, consumed, cursor.remaining());
    for diagnostic in &diagnostics {
        warn!(imei = %frame.imei, "{}", diagnostic);
    }
    debug!(
        imei = %frame.imei,
        records = frame.records.len(),
        consumed,
        "Decoded AVL frame"
    );

    Ok(DecodeReport {
        frame,
        consumed,
        diagnostics,
    })
}

fn collect_diagnostics(frame: &FrameRecord, consumed: usize, trailing: usize) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if !KNOWN_CODECS.contains(&frame.codec()) {
        diagnostics.push(Diagnostic::UnexpectedCodec(frame.codec()));
    }

    for (index, record) in frame.records.iter().enumerate() {
        let actual = record.io_element.declared_entries();
        if actual != record.io_element.total_io as usize {
            diagnostics.push(Diagnostic::IoCountMismatch {
                record: index,
                declared: record.io_element.total_io,
                actual,
            });
        }
    }

    if frame.record_count != frame.record_count_echo {
        diagnostics.push(Diagnostic::RecordCountEchoMismatch {
            header: frame.record_count,
            footer: frame.record_count_echo,
        });
    }

    let covered = consumed - FIELD_LENGTH_OFFSET - (FOOTER_LEN - 1);
    if covered != frame.field_length as usize {
        diagnostics.push(Diagnostic::FieldLengthMismatch {
            declared: frame.field_length,
            actual: covered,
        });
    }

    if trailing > 0 {
        diagnostics.push(Diagnostic::TrailingBytes(trailing));
    }

    diagnostics
}

/// Read a binary AVL frame from disk and decode it
pub fn parse_avl_file(file_path: &Path) -> anyhow::Result<DecodeReport> {
    let data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read AVL file: {:?}", file_path))?;

    decode_report(&data).with_context(|| format!("Failed to decode AVL file: {:?}", file_path))
}
