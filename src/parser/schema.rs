//! Field layout of an AVL Codec 8 frame
//!
//! Every fixed-width field the decoder reads is described here once, as a
//! (key, width, rule) triple, and the cursor reads every field through its
//! `FieldSpec`. The tables list the fields in wire order so widths and order can be
//! checked without running the decoder.

/// How the bytes of a field are turned into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Consumed but not surfaced
    Skip,
    /// ASCII text
    Ascii,
    /// Big-endian unsigned integer
    Unsigned,
    /// Opaque bytes surfaced as lowercase hex
    Hex,
    /// Sign-magnitude fixed-point coordinate
    Coordinate,
}

/// One field of the wire layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub width: usize,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn new(key: &'static str, width: usize, rule: FieldRule) -> Self {
        Self { key, width, rule }
    }
}

/// Minimum buffer length accepted before any field is read
pub const MIN_FRAME_LEN: usize = 20;

// Header
pub const PREAMBLE: FieldSpec = FieldSpec::new("preamble", 2, FieldRule::Skip);
pub const IMEI: FieldSpec = FieldSpec::new("IMEI", 15, FieldRule::Ascii);
pub const ZERO_PREAMBLE: FieldSpec = FieldSpec::new("zero-preamble", 4, FieldRule::Skip);
pub const FIELD_LENGTH: FieldSpec = FieldSpec::new("field-length", 4, FieldRule::Unsigned);
pub const CODEC_ID: FieldSpec = FieldSpec::new("codec-id", 1, FieldRule::Unsigned);
pub const RECORD_COUNT: FieldSpec = FieldSpec::new("number-of-data-1", 1, FieldRule::Unsigned);

pub const HEADER_FIELDS: [FieldSpec; 6] = [
    PREAMBLE,
    IMEI,
    ZERO_PREAMBLE,
    FIELD_LENGTH,
    CODEC_ID,
    RECORD_COUNT,
];

// Record body
pub const TIMESTAMP: FieldSpec = FieldSpec::new("ts", 8, FieldRule::Unsigned);
pub const PRIORITY: FieldSpec = FieldSpec::new("priority", 1, FieldRule::Unsigned);
pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 4, FieldRule::Coordinate);
pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 4, FieldRule::Coordinate);
pub const ALTITUDE: FieldSpec = FieldSpec::new("altitude", 2, FieldRule::Unsigned);
pub const ANGLE: FieldSpec = FieldSpec::new("angle", 2, FieldRule::Unsigned);
pub const SATELLITES: FieldSpec = FieldSpec::new("satellites", 1, FieldRule::Unsigned);
pub const SPEED: FieldSpec = FieldSpec::new("speed", 2, FieldRule::Unsigned);

pub const RECORD_FIELDS: [FieldSpec; 8] = [
    TIMESTAMP, PRIORITY, LONGITUDE, LATITUDE, ALTITUDE, ANGLE, SATELLITES, SPEED,
];

// IO element
pub const EVENT_IO_ID: FieldSpec = FieldSpec::new("event-io-id", 2, FieldRule::Unsigned);
pub const TOTAL_IO: FieldSpec = FieldSpec::new("total-io", 2, FieldRule::Unsigned);
pub const GROUP_COUNT: FieldSpec = FieldSpec::new("count", 2, FieldRule::Unsigned);
pub const IO_ID: FieldSpec = FieldSpec::new("id", 2, FieldRule::Unsigned);
pub const VARIABLE_LENGTH: FieldSpec = FieldSpec::new("length", 2, FieldRule::Unsigned);

// Footer
pub const RECORD_COUNT_ECHO: FieldSpec =
    FieldSpec::new("number-of-data-2", 1, FieldRule::Unsigned);
pub const CHECKSUM: FieldSpec = FieldSpec::new("CRC16", 4, FieldRule::Hex);

pub const FOOTER_FIELDS: [FieldSpec; 2] = [RECORD_COUNT_ECHO, CHECKSUM];

/// Sum of the widths of a field table
pub const fn layout_width(fields: &[FieldSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].width;
        i += 1;
    }
    total
}

pub const HEADER_LEN: usize = layout_width(&HEADER_FIELDS);
pub const FOOTER_LEN: usize = layout_width(&FOOTER_FIELDS);

/// Bytes before the codec id that `field-length` does not cover
pub const FIELD_LENGTH_OFFSET: usize = HEADER_LEN - CODEC_ID.width - RECORD_COUNT.width;
