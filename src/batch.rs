//! Batch conversion of envelope files
//!
//! Each envelope is loaded, checked, decoded and exported on its own. A
//! failure in one file is logged and counted; the remaining files are still
//! processed.

use crate::export::{export_frame, ExportOptions, ExportReport};
use crate::filters::{envelope_data, envelope_skip_reason};
use crate::parser::decode_report;
use crate::source::SourceHandle;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// What happened to one envelope file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted(ExportReport),
    Skipped(String),
}

/// Totals of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }
}

/// Load, decode and export a single envelope file
pub fn convert_envelope_file(
    input_path: &Path,
    export_options: &ExportOptions,
) -> Result<ConversionOutcome> {
    let text = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read envelope: {:?}", input_path))?;
    let doc: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse envelope JSON: {:?}", input_path))?;

    if let Some(reason) = envelope_skip_reason(&doc) {
        return Ok(ConversionOutcome::Skipped(reason));
    }

    let hex_data = envelope_data(&doc).ok_or_else(|| anyhow!("Envelope has no data field"))?;
    let bytes = hex::decode(hex_data)
        .with_context(|| format!("Envelope data is not valid hex: {:?}", input_path))?;
    let report = decode_report(&bytes)
        .with_context(|| format!("Failed to decode AVL frame: {:?}", input_path))?;

    debug!(
        file = ?input_path,
        records = report.frame.records.len(),
        diagnostics = report.diagnostics.len(),
        "Decoded envelope"
    );

    let exported = export_frame(&report.frame, input_path, export_options)?;
    Ok(ConversionOutcome::Converted(exported))
}

/// Convert every source, isolating per-file failures
pub fn run_batch(sources: &[SourceHandle], export_options: &ExportOptions) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for source in sources {
        match convert_envelope_file(&source.path, export_options) {
            Ok(ConversionOutcome::Converted(report)) => {
                info!(file = %source.file_name, output = ?report.json_path, "Converted");
                summary.converted += 1;
            }
            Ok(ConversionOutcome::Skipped(reason)) => {
                debug!(file = %source.file_name, %reason, "Skipped");
                summary.skipped += 1;
            }
            Err(e) => {
                warn!(file = %source.file_name, "Error processing envelope: {:#}", e);
                summary.failed += 1;
            }
        }
    }

    summary
}
