//! Numeric conversion utilities for AVL fields
//!
//! Coordinates arrive as 32-bit fixed-point integers scaled by 10^7 with the
//! sign carried in bit 31.

/// Fixed-point scale of coordinate fields (degrees * 10^7)
pub const COORDINATE_SCALE: f64 = 10_000_000.0;

const SIGN_BIT: u32 = 1 << 31;

/// Convert a raw coordinate to degrees
///
/// When bit 31 is set the magnitude is the bitwise complement of all 32 bits,
/// without the `+ 1` a two's-complement decode would add. Negative values
/// therefore sit one unit (1e-7 degrees) closer to zero than a strict
/// two's-complement reading.
pub fn convert_coordinate(raw_value: u32) -> f64 {
    if raw_value & SIGN_BIT != 0 {
        let magnitude = raw_value ^ 0xFFFF_FFFF;
        -(magnitude as f64 / COORDINATE_SCALE)
    } else {
        raw_value as f64 / COORDINATE_SCALE
    }
}
