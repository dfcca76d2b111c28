use crate::types::record::AvlRecord;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Fully decoded AVL frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FrameRecord {
    /// Device identity, 15 ASCII characters
    #[cfg_attr(feature = "serde", serde(rename = "IMEI"))]
    pub imei: String,
    /// Bytes covered from the codec id through the record count echo
    #[cfg_attr(feature = "serde", serde(rename = "field-length"))]
    pub field_length: u32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "codec-id", serialize_with = "serialize_hex")
    )]
    pub codec_id: [u8; 1],
    #[cfg_attr(feature = "serde", serde(rename = "number-of-data-1"))]
    pub record_count: u8,
    #[cfg_attr(feature = "serde", serde(rename = "AVL-data"))]
    pub records: Vec<AvlRecord>,
    #[cfg_attr(feature = "serde", serde(rename = "number-of-data-2"))]
    pub record_count_echo: u8,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "CRC16", serialize_with = "serialize_hex")
    )]
    pub checksum: [u8; 4],
}

impl FrameRecord {
    pub fn codec(&self) -> u8 {
        self.codec_id[0]
    }

    pub fn codec_id_hex(&self) -> String {
        hex::encode(self.codec_id)
    }

    pub fn checksum_hex(&self) -> String {
        hex::encode(self.checksum)
    }

    pub fn first_timestamp(&self) -> Option<u64> {
        self.records.iter().map(|r| r.timestamp_ms).min()
    }

    pub fn last_timestamp(&self) -> Option<u64> {
        self.records.iter().map(|r| r.timestamp_ms).max()
    }
}

#[cfg(feature = "serde")]
fn serialize_hex<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
