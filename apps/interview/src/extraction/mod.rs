// Record → interview material.
// Simple interview: one free-text summary. Elaborate interview: career intent
// per grade plus attitude-filtered source excerpts.
// Pure functions only; nothing here calls the LLM.

pub mod career;
pub mod catalog;
pub mod sources;
pub mod summary;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::career::{extract_career_intent, CareerIntent};
use crate::extraction::catalog::Catalog;
use crate::extraction::sources::{extract_sources, filter_attitude, SourceItem};
use crate::models::record::StudentRecord;

/// Everything the elaborate interview draws topics from.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub career: CareerIntent,
    /// Attitude-filtered; never empty.
    pub sources: Vec<SourceItem>,
}

/// All academic-record strings followed by the reading field, newline separated.
pub fn record_text(record: &StudentRecord) -> String {
    let mut text = record.academic_texts().collect::<Vec<_>>().join("\n");
    let reading = record.reading_text();
    if !reading.is_empty() {
        text.push('\n');
        text.push_str(&reading);
    }
    text
}

/// Runs career-intent and source extraction over the record.
///
/// Returns `AppError::ExtractionEmpty` when no source survives the attitude filter.
pub fn extract(record: &StudentRecord, catalog: &Catalog) -> Result<Extraction, AppError> {
    let text = record_text(record);

    let career = extract_career_intent(&text, catalog);
    let raw_sources = extract_sources(&text);
    let raw_count = raw_sources.len();
    let sources = filter_attitude(raw_sources, catalog);

    info!(
        "Extracted {} source items ({} dropped as attitude praise), {} career statements",
        sources.len(),
        raw_count - sources.len(),
        career.iter().count()
    );

    if career.is_empty() {
        debug!("No career statements found; topics will be drawn from every source");
    }

    if sources.is_empty() {
        return Err(AppError::ExtractionEmpty);
    }

    Ok(Extraction { career, sources })
}
