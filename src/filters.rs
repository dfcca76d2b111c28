//! Envelope eligibility checks
//!
//! Raw frames arrive wrapped in a JSON document whose `data` field holds the
//! frame as hex text. Only documents that look like a full AVL upload are
//! handed to the decoder; everything else is skipped without an error.

use serde_json::Value;

/// Hex prefix of an AVL upload (preamble announcing a 15-byte identity)
pub const AVL_HEX_PREFIX: &str = "000F";

/// Shortest hex payload worth decoding (209 bytes)
pub const MIN_HEX_LEN: usize = 418;

/// Field of the envelope holding the hex frame
pub const DATA_FIELD: &str = "data";

/// Reason an envelope would be skipped, `None` when it is decodable
pub fn envelope_skip_reason(doc: &Value) -> Option<String> {
    let data = match doc.get(DATA_FIELD) {
        Some(Value::String(data)) => data,
        Some(_) => return Some(format!("'{}' is not a string", DATA_FIELD)),
        None => return Some(format!("no '{}' field", DATA_FIELD)),
    };

    if !data.starts_with(AVL_HEX_PREFIX) {
        return Some(format!("data does not start with {}", AVL_HEX_PREFIX));
    }

    if data.len() < MIN_HEX_LEN {
        return Some(format!(
            "data too short ({} < {} hex chars)",
            data.len(),
            MIN_HEX_LEN
        ));
    }

    None
}

/// True when the envelope carries a hex frame the decoder should see
pub fn is_decodable_envelope(doc: &Value) -> bool {
    envelope_skip_reason(doc).is_none()
}

/// Hex frame of an envelope, if it has one
pub fn envelope_data(doc: &Value) -> Option<&str> {
    doc.get(DATA_FIELD).and_then(Value::as_str)
}
