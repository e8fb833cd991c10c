// Resume pipeline: text extraction, heuristic field parsing, record assembly.
// Extraction and parsing are synchronous and CPU-bound; handlers run them on
// the blocking pool.

pub mod extractor;
pub mod handlers;
pub mod ordered_set;
pub mod parser;
pub mod patterns;
pub mod section;

use crate::models::resume::ResumeRecord;
use crate::resume::extractor::{extract, ExtractError};

/// Parses extracted `raw_text` and merges the result with the upload metadata.
pub fn build_record(filename: String, content_type: String, raw_text: String) -> ResumeRecord {
    let fields = parser::parse(&raw_text);
    ResumeRecord::new(filename, content_type, raw_text, fields)
}

/// Full per-upload pipeline: extract, then parse, then assemble the record.
pub fn process_upload(
    filename: String,
    content_type: String,
    bytes: &[u8],
) -> Result<ResumeRecord, ExtractError> {
    let raw_text = extract(bytes, &content_type)?;
    if extractor::is_extraction_failure(&raw_text) {
        tracing::warn!(%filename, %content_type, "Continuing with extraction sentinel text");
    }
    Ok(build_record(filename, content_type, raw_text))
}
