//! `imagery-schedule extract <FILE>` — extract a saved page offline.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use imagery_schedule::{extract_document, ScheduleRecord};
use serde::Serialize;
use std::path::Path;

/// Extraction of one local file.
#[derive(Debug, Serialize)]
pub struct FileExtraction {
    pub layout: String,
    pub records: Vec<ScheduleRecord>,
    pub skipped: Vec<String>,
}

pub fn extract_file(path: &Path) -> Result<FileExtraction> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let (layout, extraction) = extract_document(&html);

    Ok(FileExtraction {
        layout: layout.to_string(),
        records: extraction.records,
        skipped: extraction.skipped.iter().map(|e| e.to_string()).collect(),
    })
}

pub fn run(path: &Path) -> Result<()> {
    let result = extract_file(path)?;

    if output::is_json() {
        output::print_json(&result);
        return Ok(());
    }

    output::print_json(&result.records);

    if !output::is_quiet() {
        let s = Styled::new();
        for item in &result.skipped {
            eprintln!("  {} skipped {item}", s.warn_sym());
        }
        eprintln!(
            "  {} {} ({} layout)",
            s.ok_sym(),
            output::count(result.records.len(), "record", "records"),
            result.layout
        );
    }

    Ok(())
}
