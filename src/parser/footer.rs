use crate::error::DecodeResult;
use crate::parser::schema::{CHECKSUM, RECORD_COUNT_ECHO};
use crate::parser::stream::AvlCursor;

/// Trailing fields of an AVL frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFooter {
    pub record_count_echo: u8,
    /// Not verified by the decoder
    pub checksum: [u8; 4],
}

pub fn parse_footer(cursor: &mut AvlCursor) -> DecodeResult<FrameFooter> {
    let record_count_echo = cursor.read_uint_field::<u8>(&RECORD_COUNT_ECHO)?;
    let raw = cursor.read_field(&CHECKSUM)?;

    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(raw);

    Ok(FrameFooter {
        record_count_echo,
        checksum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_parse_footer() {
        let data = [0x07, 0x00, 0x00, 0x68, 0x0E];
        let footer = parse_footer(&mut AvlCursor::new(&data)).unwrap();
        assert_eq!(footer.record_count_echo, 7);
        assert_eq!(footer.checksum, [0x00, 0x00, 0x68, 0x0E]);
    }

    #[test]
    fn test_short_checksum_is_truncated() {
        let data = [0x07, 0x00, 0x00];
        let err = parse_footer(&mut AvlCursor::new(&data)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedFrame {
                offset: 1,
                needed: 4,
                available: 2,
            }
        );
    }
}
