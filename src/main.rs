//! CLI binary for AVL Parser
//!
//! Converts raw JSON envelopes holding hex AVL frames into decoded JSON
//! documents. With no arguments it reads `raw-data-teltonika/` and writes
//! `parsed/`.

use anyhow::Result;
use avl_parser::{
    list_candidate_sources, run_batch, ExportOptions, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};
use clap::{Arg, Command};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn build_command() -> Command {
    Command::new("AVL Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode Teltonika AVL Codec 8 frames from JSON envelopes into JSON documents.")
        .arg(
            Arg::new("inputs")
                .help("Envelope files, directories or glob patterns. Only names matching ^\\w+\\.json$ are converted.")
                .num_args(1..)
                .default_value(DEFAULT_INPUT_DIR)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for decoded output files")
                .default_value(DEFAULT_OUTPUT_DIR)
                .value_name("DIR"),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Also write one CSV row per record next to each JSON file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed decoding information")
                .action(clap::ArgAction::SetTrue),
        )
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_tracing(debug);

    let inputs: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let export_options = ExportOptions {
        json: true,
        csv: matches.get_flag("csv"),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
    };

    debug!(?inputs, ?export_options, "Starting batch");

    let sources = list_candidate_sources(&inputs)?;
    if sources.is_empty() {
        info!("No candidate envelope files found in {:?}", inputs);
        return Ok(());
    }

    let summary = run_batch(&sources, &export_options);
    info!(
        converted = summary.converted,
        skipped = summary.skipped,
        failed = summary.failed,
        "Processed {} files",
        summary.total()
    );

    if summary.failed > 0 {
        error!("{} files could not be converted", summary.failed);
        std::process::exit(1);
    }

    Ok(())
}
