use crate::types::io::IoElement;

#[cfg(feature = "serde")]
use serde::Serialize;

/// GPS fix and motion data of a record
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: u16,
    pub angle: u16,
    pub satellites: u8,
    pub speed: u16,
}

/// One telemetry sample of an AVL frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AvlRecord {
    /// Milliseconds since the Unix epoch
    #[cfg_attr(feature = "serde", serde(rename = "ts"))]
    pub timestamp_ms: u64,
    pub priority: u8,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(rename = "io-element"))]
    pub io_element: IoElement,
}
