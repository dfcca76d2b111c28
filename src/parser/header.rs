use crate::error::{DecodeError, DecodeResult};
use crate::parser::schema::{
    CODEC_ID, FIELD_LENGTH, IMEI, MIN_FRAME_LEN, PREAMBLE, RECORD_COUNT, ZERO_PREAMBLE,
};
use crate::parser::stream::AvlCursor;
use tracing::debug;

/// Leading fields of an AVL frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub imei: String,
    pub field_length: u32,
    pub codec_id: u8,
    pub record_count: u8,
}

/// Parse the frame header from the start of the buffer
///
/// The buffer must hold at least [`MIN_FRAME_LEN`] bytes. The header itself
/// is wider than that, so a short frame that passes the length check can
/// still fail with `TruncatedFrame`.
pub fn parse_header(cursor: &mut AvlCursor) -> DecodeResult<FrameHeader> {
    if cursor.buffer_len() < MIN_FRAME_LEN {
        return Err(DecodeError::InvalidLength {
            actual: cursor.buffer_len(),
            minimum: MIN_FRAME_LEN,
        });
    }

    cursor.skip_field(&PREAMBLE)?;
    let imei = cursor.read_ascii_field(&IMEI)?;
    cursor.skip_field(&ZERO_PREAMBLE)?;
    let field_length = cursor.read_uint_field::<u32>(&FIELD_LENGTH)?;
    let codec_id = cursor.read_uint_field::<u8>(&CODEC_ID)?;
    let record_count = cursor.read_uint_field::<u8>(&RECORD_COUNT)?;

    debug!(
        %imei,
        field_length,
        codec_id = format_args!("0x{:02x}", codec_id),
        record_count,
        "Parsed AVL header"
    );

    Ok(FrameHeader {
        imei,
        field_length,
        codec_id,
        record_count,
    })
}
