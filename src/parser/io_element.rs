//! IO element parsing
//!
//! An IO element carries an event id, an advisory total, and five groups of
//! id/value pairs. Each group starts with its own 2-byte entry count; the
//! groups always appear in width order 1, 2, 4, 8 and then variable length.

use crate::error::DecodeResult;
use crate::parser::schema::{EVENT_IO_ID, GROUP_COUNT, IO_ID, TOTAL_IO, VARIABLE_LENGTH};
use crate::parser::stream::{AvlCursor, BigEndian};
use crate::types::{IoElement, IoEntry, VariableIoEntry, WidthClass};
use tracing::trace;

/// Parse one IO element
pub fn parse_io_element(cursor: &mut AvlCursor) -> DecodeResult<IoElement> {
    let event_io_id = cursor.read_uint_field::<u16>(&EVENT_IO_ID)?;
    let total_io = cursor.read_uint_field::<u16>(&TOTAL_IO)?;

    let n1 = parse_fixed_group::<u8>(cursor, WidthClass::One)?;
    let n2 = parse_fixed_group::<u16>(cursor, WidthClass::Two)?;
    let n4 = parse_fixed_group::<u32>(cursor, WidthClass::Four)?;
    let n8 = parse_fixed_group::<u64>(cursor, WidthClass::Eight)?;
    let nx = parse_variable_group(cursor)?;

    Ok(IoElement {
        event_io_id,
        total_io,
        n1,
        n2,
        n4,
        n8,
        nx,
    })
}

/// Parse a group whose values all have the width of `T`
fn parse_fixed_group<T: BigEndian>(
    cursor: &mut AvlCursor,
    class: WidthClass,
) -> DecodeResult<Vec<IoEntry<T>>> {
    debug_assert_eq!(class.value_width(), Some(T::WIDTH));

    let count = cursor.read_uint_field::<u16>(&GROUP_COUNT)?;
    trace!(
        group = class.key_prefix(),
        count,
        offset = cursor.position(),
        "IO group"
    );

    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = cursor.read_uint_field::<u16>(&IO_ID)?;
        let value = cursor.read_be::<T>()?;
        entries.push(IoEntry { id, value });
    }

    Ok(entries)
}

/// Parse the variable-length group: each entry carries its own byte length
fn parse_variable_group(cursor: &mut AvlCursor) -> DecodeResult<Vec<VariableIoEntry>> {
    let count = cursor.read_uint_field::<u16>(&GROUP_COUNT)?;
    trace!(
        group = WidthClass::Variable.key_prefix(),
        count,
        offset = cursor.position(),
        "IO group"
    );

    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = cursor.read_uint_field::<u16>(&IO_ID)?;
        let length = cursor.read_uint_field::<u16>(&VARIABLE_LENGTH)?;
        let value = cursor.read(length as usize)?.to_vec();
        entries.push(VariableIoEntry { id, length, value });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::parser::test_support::IoElementBytes;

    #[test]
    fn test_all_five_groups_in_order() {
        let data = IoElementBytes::new(0x0047, 5)
            .n1(0x0047, 2)
            .n2(0x0043, 0x2209)
            .n4(0x00F1, 0x0001_0203)
            .n8(0x004E, 0x0102_0304_0506_0708)
            .nx(0x0101, &[0xDE, 0xAD, 0xBE])
            .build();
        let mut cursor = AvlCursor::new(&data);

        let element = parse_io_element(&mut cursor).unwrap();
        assert_eq!(element.event_io_id, 0x0047);
        assert_eq!(element.total_io, 5);
        assert_eq!(element.n1, vec![IoEntry { id: 0x0047, value: 2 }]);
        assert_eq!(element.n2, vec![IoEntry { id: 0x0043, value: 0x2209 }]);
        assert_eq!(
            element.n4,
            vec![IoEntry {
                id: 0x00F1,
                value: 0x0001_0203
            }]
        );
        assert_eq!(
            element.n8,
            vec![IoEntry {
                id: 0x004E,
                value: 0x0102_0304_0506_0708
            }]
        );
        assert_eq!(element.nx[0].length, 3);
        assert_eq!(element.nx[0].value_hex(), "deadbe");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_empty_groups_consume_only_counts() {
        let data = IoElementBytes::new(0, 0).build();
        assert_eq!(data.len(), 4 + 5 * 2);

        let mut cursor = AvlCursor::new(&data);
        let element = parse_io_element(&mut cursor).unwrap();
        assert_eq!(element, IoElement::default());
        assert_eq!(cursor.position(), data.len());
    }

    #[test]
    fn test_zero_length_variable_entry() {
        let data = IoElementBytes::new(0, 1).nx(0x0200, &[]).build();
        let mut cursor = AvlCursor::new(&data);

        let element = parse_io_element(&mut cursor).unwrap();
        assert_eq!(element.nx.len(), 1);
        assert_eq!(element.nx[0].length, 0);
        assert!(element.nx[0].value.is_empty());
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_variable_length_past_end_is_truncated() {
        let mut data = IoElementBytes::new(0, 1).build();
        // Replace the empty nx group with one entry declaring 16 bytes but carrying 2
        data.truncate(data.len() - 2);
        data.extend_from_slice(&[0x00, 0x01, 0x02, 0x00, 0x00, 0x10, 0xAA, 0xBB]);

        let err = parse_io_element(&mut AvlCursor::new(&data)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedFrame {
                offset: data.len() - 2,
                needed: 16,
                available: 2,
            }
        );
    }

    #[test]
    fn test_group_count_past_end_is_truncated() {
        let mut data = IoElementBytes::new(0, 3).build();
        // n1 declares 3 entries, none follow before the buffer ends
        data.truncate(4);
        data.extend_from_slice(&[0x00, 0x03, 0x00, 0x16, 0x01]);

        let err = parse_io_element(&mut AvlCursor::new(&data)).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedFrame { .. }));
    }
}
