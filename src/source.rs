//! Input discovery for batch conversion
//!
//! Inputs may be envelope files, directories holding them, or glob patterns.
//! Directories are scanned one level deep. Only file names matching
//! `^\w+\.json$` are candidates.

use anyhow::{Context, Result};
use glob::glob;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Default directory holding raw envelopes
pub const DEFAULT_INPUT_DIR: &str = "raw-data-teltonika";

/// Envelope file that may contain an AVL frame
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceHandle {
    pub path: PathBuf,
    pub file_name: String,
}

fn candidate_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\w+\.json$").expect("static pattern is valid"))
}

/// True when a file name looks like a raw envelope
pub fn is_candidate_file_name(file_name: &str) -> bool {
    candidate_name_pattern().is_match(file_name)
}

/// Expand inputs into a sorted, de-duplicated list of candidate envelopes
pub fn list_candidate_sources(inputs: &[String]) -> Result<Vec<SourceHandle>> {
    let mut visited = HashSet::new();
    let mut sources = Vec::new();

    for input in inputs {
        if input.contains('*') || input.contains('?') {
            let paths = glob(input)
                .with_context(|| format!("Invalid glob pattern '{}'", input))?
                .collect::<std::result::Result<Vec<_>, _>>()
                .with_context(|| format!("Error expanding glob pattern '{}'", input))?;
            debug!(pattern = %input, matched = paths.len(), "Expanded glob");

            for path in paths {
                if path.is_file() {
                    push_candidate(&path, &mut visited, &mut sources);
                }
            }
            continue;
        }

        let path = Path::new(input);
        if path.is_dir() {
            let entries = std::fs::read_dir(path)
                .with_context(|| format!("Failed to read directory: {:?}", path))?;
            for entry in entries {
                let entry_path = entry?.path();
                if entry_path.is_file() {
                    push_candidate(&entry_path, &mut visited, &mut sources);
                }
            }
        } else if path.is_file() {
            push_candidate(path, &mut visited, &mut sources);
        } else {
            warn!(input = %input, "Path not found or not accessible");
        }
    }

    sources.sort();
    Ok(sources)
}

fn push_candidate(path: &Path, visited: &mut HashSet<PathBuf>, sources: &mut Vec<SourceHandle>) {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => return,
    };

    if !is_candidate_file_name(&file_name) {
        debug!(file = %file_name, "Skipping file with non-matching name");
        return;
    }

    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical) {
        return;
    }

    sources.push(SourceHandle {
        path: path.to_path_buf(),
        file_name,
    });
}
