//! Export functionality for decoded AVL frames
//!
//! Frames are written as pretty-printed JSON (four-space indent, keys in wire
//! order) and optionally as a flat per-record CSV.

use crate::types::*;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default directory for converted output
pub const DEFAULT_OUTPUT_DIR: &str = "parsed";

/// Export options for controlling output formats
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub json: bool,
    pub csv: bool,
    /// Output directory; `None` puts a `parsed` directory beside the input directory
    pub output_dir: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            json: true,
            csv: false,
            output_dir: None,
        }
    }
}

/// Paths written by an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub json_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
}

/// Compute the output directory for an input file
pub fn compute_output_dir(input_path: &Path, export_options: &ExportOptions) -> PathBuf {
    match &export_options.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .and_then(Path::parent)
            .map(|root| root.join(DEFAULT_OUTPUT_DIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    }
}

/// Compute (json, csv) output paths; JSON keeps the input file name
pub fn compute_export_paths(input_path: &Path, export_options: &ExportOptions) -> (PathBuf, PathBuf) {
    let output_dir = compute_output_dir(input_path, export_options);
    let file_name = input_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "frame.json".into());
    let json_path = output_dir.join(&file_name);
    let csv_path = json_path.with_extension("csv");
    (json_path, csv_path)
}

/// Serialize a frame the way it is written to disk
pub fn frame_to_json_string(frame: &FrameRecord) -> Result<String> {
    let mut buf = Vec::new();
    write_frame_json(frame, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_frame_json<W: Write>(frame: &FrameRecord, writer: W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    frame
        .serialize(&mut serializer)
        .context("Failed to serialize frame")?;
    Ok(())
}

/// Export a decoded frame to JSON
pub fn export_to_json(frame: &FrameRecord, output_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON file: {:?}", output_path))?;
    let mut writer = BufWriter::new(file);
    write_frame_json(frame, &mut writer)?;
    writer.flush()?;

    Ok(output_path.to_path_buf())
}

/// CSV column names, one row per record
pub const CSV_HEADER: [&str; 15] = [
    "ts",
    "priority",
    "longitude",
    "latitude",
    "altitude",
    "angle",
    "satellites",
    "speed",
    "event-io-id",
    "total-io",
    "n1-count",
    "n2-count",
    "n4-count",
    "n8-count",
    "nx-count",
];

/// Export decoded records to CSV
#[cfg(feature = "csv")]
pub fn export_to_csv(frame: &FrameRecord, output_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create CSV file: {:?}", output_path))?;
    writer.write_record(CSV_HEADER)?;

    for record in &frame.records {
        let position = &record.position;
        let io = &record.io_element;
        let mut row = vec![
            record.timestamp_ms.to_string(),
            record.priority.to_string(),
            position.longitude.to_string(),
            position.latitude.to_string(),
            position.altitude.to_string(),
            position.angle.to_string(),
            position.satellites.to_string(),
            position.speed.to_string(),
            io.event_io_id.to_string(),
            io.total_io.to_string(),
        ];
        row.extend(
            WidthClass::WIRE_ORDER
                .iter()
                .map(|class| io.group_len(*class).to_string()),
        );
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(output_path.to_path_buf())
}

/// Export a frame in every format enabled in `export_options`
pub fn export_frame(
    frame: &FrameRecord,
    input_path: &Path,
    export_options: &ExportOptions,
) -> Result<ExportReport> {
    let (json_path, csv_path) = compute_export_paths(input_path, export_options);
    let mut report = ExportReport::default();

    if export_options.json {
        report.json_path = Some(export_to_json(frame, &json_path)?);
    }

    #[cfg(feature = "csv")]
    {
        if export_options.csv {
            report.csv_path = Some(export_to_csv(frame, &csv_path)?);
        }
    }
    #[cfg(not(feature = "csv"))]
    let _ = csv_path;

    Ok(report)
}
