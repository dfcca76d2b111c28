//! End-to-end decoding of a captured device upload
//!
//! The fixture holds one 7-record frame followed by the start of the next
//! upload.

#![cfg(feature = "json")]

use avl_parser::{decode, decode_hex, decode_report, DecodeError, Diagnostic, IoEntry};
use proptest::prelude::*;

const SAMPLE_ENVELOPE: &str = include_str!("fixtures/863719065084221_sample.json");

/// Bytes of the first frame: 27 header + 7 * 136 record + 5 footer
const SAMPLE_FRAME_LEN: usize = 984;

fn sample_bytes() -> Vec<u8> {
    let doc: serde_json::Value = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();
    hex::decode(doc["data"].as_str().unwrap()).unwrap()
}

#[test]
fn test_sample_header_and_footer() {
    let frame = decode(&sample_bytes()).unwrap();

    assert_eq!(frame.imei, "863719065084221");
    assert_eq!(frame.field_length, 955);
    assert_eq!(frame.codec_id_hex(), "8e");
    assert_eq!(frame.record_count, 7);
    assert_eq!(frame.records.len(), 7);
    assert_eq!(frame.record_count_echo, frame.record_count);
    assert_eq!(frame.checksum_hex(), "0000680e");
}

#[test]
fn test_sample_records() {
    let frame = decode(&sample_bytes()).unwrap();

    for record in &frame.records {
        assert_eq!(record.timestamp_ms, 1_724_938_060_865);
        assert_eq!(record.priority, 0);
        assert_eq!(record.position.longitude, 106.8159583);
        assert_eq!(record.position.latitude, -6.3132399);
        assert_eq!(record.position.altitude, 34);
        assert_eq!(record.position.angle, 73);
        assert_eq!(record.position.satellites, 11);
        assert_eq!(record.position.speed, 0);

        let io = &record.io_element;
        assert_eq!(io.event_io_id, 0);
        assert_eq!(io.total_io, 29);
        assert_eq!(io.n1.len(), 18);
        assert_eq!(io.n2.len(), 11);
        assert!(io.n4.is_empty());
        assert!(io.n8.is_empty());
        assert!(io.nx.is_empty());
        assert_eq!(io.declared_entries(), io.total_io as usize);
    }
}

#[test]
fn test_fifth_record_io_entries() {
    let frame = decode(&sample_bytes()).unwrap();
    let io = &frame.records[4].io_element;

    assert_eq!(io.n1[0], IoEntry { id: 0x0016, value: 1 });
    assert_eq!(io.n1[1], IoEntry { id: 0x0047, value: 2 });
    assert_eq!(io.find_u8(0x0047), Some(2));
    assert_eq!(io.n1.last(), Some(&IoEntry { id: 666, value: 2 }));
    assert_eq!(io.n2[0], IoEntry { id: 0x0043, value: 8713 });
    assert_eq!(io.find_u16(617), Some(255));
}

#[test]
fn test_sample_consumes_exactly_one_frame() {
    let data = sample_bytes();
    let report = decode_report(&data).unwrap();

    assert_eq!(report.consumed, SAMPLE_FRAME_LEN);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::TrailingBytes(data.len() - SAMPLE_FRAME_LEN)]
    );

    // Without the trailing upload the frame decodes cleanly
    let exact = decode_report(&data[..SAMPLE_FRAME_LEN]).unwrap();
    assert!(exact.is_clean(), "{:?}", exact.diagnostics);
    assert_eq!(exact.frame, report.frame);
}

#[test]
fn test_every_short_prefix_fails() {
    let data = sample_bytes();

    for len in 0..SAMPLE_FRAME_LEN {
        let err = decode(&data[..len]).unwrap_err();
        if len < 20 {
            assert!(
                matches!(err, DecodeError::InvalidLength { .. }),
                "len {}: {:?}",
                len,
                err
            );
        } else {
            assert!(
                matches!(err, DecodeError::TruncatedFrame { .. }),
                "len {}: {:?}",
                len,
                err
            );
        }
    }
}

#[test]
fn test_decode_hex_matches_decode() {
    let doc: serde_json::Value = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();
    let from_hex = decode_hex(doc["data"].as_str().unwrap()).unwrap();
    assert_eq!(from_hex, decode(&sample_bytes()).unwrap());
}

#[test]
fn test_decode_is_repeatable() {
    let data = sample_bytes();
    assert_eq!(decode(&data), decode(&data));
}

proptest! {
    #[test]
    fn decode_is_pure(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(decode(&data), decode(&data));
    }

    #[test]
    fn corrupted_bytes_keep_record_count(offset in 27usize..SAMPLE_FRAME_LEN, byte in any::<u8>()) {
        let mut data = sample_bytes();
        data[offset] = byte;
        if let Ok(report) = decode_report(&data) {
            prop_assert_eq!(report.frame.records.len(), report.frame.record_count as usize);
            prop_assert!(report.consumed <= data.len());
        }
    }
}
