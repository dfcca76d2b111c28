use crate::error::DecodeResult;
use crate::parser::io_element::parse_io_element;
use crate::parser::schema::{
    ALTITUDE, ANGLE, LATITUDE, LONGITUDE, PRIORITY, SATELLITES, SPEED, TIMESTAMP,
};
use crate::parser::stream::AvlCursor;
use crate::types::{AvlRecord, Position};
use tracing::debug;

/// Parse a single AVL record, IO element included
pub fn parse_record(cursor: &mut AvlCursor, index: usize) -> DecodeResult<AvlRecord> {
    let start = cursor.position();

    let timestamp_ms = cursor.read_uint_field::<u64>(&TIMESTAMP)?;
    let priority = cursor.read_uint_field::<u8>(&PRIORITY)?;
    let longitude = cursor.read_coordinate_field(&LONGITUDE)?;
    let latitude = cursor.read_coordinate_field(&LATITUDE)?;
    let altitude = cursor.read_uint_field::<u16>(&ALTITUDE)?;
    let angle = cursor.read_uint_field::<u16>(&ANGLE)?;
    let satellites = cursor.read_uint_field::<u8>(&SATELLITES)?;
    let speed = cursor.read_uint_field::<u16>(&SPEED)?;

    let io_element = parse_io_element(cursor)?;

    debug!(
        index,
        timestamp_ms,
        longitude,
        latitude,
        io_entries = io_element.declared_entries(),
        bytes = cursor.position() - start,
        "Parsed AVL record"
    );

    Ok(AvlRecord {
        timestamp_ms,
        priority,
        position: Position {
            longitude,
            latitude,
            altitude,
            angle,
            satellites,
            speed,
        },
        io_element,
    })
}

/// Parse exactly `count` records back to back
pub fn parse_records(cursor: &mut AvlCursor, count: u8) -> DecodeResult<Vec<AvlRecord>> {
    (0..count as usize)
        .map(|index| parse_record(cursor, index))
        .collect()
}
