//! AVL Parser Library
//!
//! A Rust library for decoding Teltonika AVL Codec 8 telemetry frames into a
//! structured record tree, plus the envelope handling and export layer used by
//! the batch converter binary.
//!
//! # Features
//!
//! - **`json`** (default): JSON envelope handling and JSON export
//! - **`csv`** (default): Per-record CSV export
//! - **`cli`** (default): Input discovery, batch conversion and the binary
//! - **`serde`**: Serialization of the decoded types
//!
//! # Quick Start
//!
//! Decode a frame held in memory:
//! ```rust,no_run
//! use avl_parser::decode;
//!
//! let bytes = std::fs::read("frame.bin").unwrap();
//! let frame = decode(&bytes).unwrap();
//! println!("{} sent {} records", frame.imei, frame.records.len());
//! for record in &frame.records {
//!     println!(
//!         "{} {:.7},{:.7}",
//!         record.timestamp_ms, record.position.latitude, record.position.longitude
//!     );
//! }
//! ```
//!
//! # Public API
//!
//! ## Decoding
//! - [`decode`] - Decode a frame from bytes
//! - [`decode_hex`] - Decode a frame from hex text
//! - [`decode_report`] - Decode and keep consumed length and diagnostics
//! - [`parse_avl_file`] - Read and decode a binary frame file
//!
//! ## Data Types
//! - [`FrameRecord`] - Complete decoded frame
//! - [`AvlRecord`] - One telemetry sample
//! - [`IoElement`] - IO data grouped by [`WidthClass`]
//! - [`DecodeError`] - Why a frame could not be decoded
//!
//! ## Conversion Utilities
//! - [`convert_coordinate`] - Raw fixed-point coordinate to degrees

// Module declarations
pub mod conversion;
pub mod error;
pub mod parser;
pub mod types;

#[cfg(feature = "json")]
pub mod export;
#[cfg(feature = "json")]
pub mod filters;

#[cfg(feature = "cli")]
pub mod batch;
#[cfg(feature = "cli")]
pub mod source;

pub use conversion::*;
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

#[cfg(feature = "json")]
pub use export::*;
#[cfg(feature = "json")]
pub use filters::*;

#[cfg(feature = "cli")]
pub use batch::*;
#[cfg(feature = "cli")]
pub use source::*;
