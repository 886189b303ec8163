//! Disease catalog parsing and validation
//!
//! Shared by every JSON-backed provider so that the same catalog is either
//! accepted or rejected the same way regardless of where it came from.

use std::collections::HashSet;

use symdx_domain::entities::DiseaseRecord;
use symdx_domain::error::{Error, Result};

/// Parse a JSON array of disease records
///
/// Fails on malformed JSON, a missing field, an empty `id` or
/// `symptom_text`, or a duplicated `id`. An empty array is valid.
pub fn parse_catalog(json: &str) -> Result<Vec<DiseaseRecord>> {
    let records: Vec<DiseaseRecord> = serde_json::from_str(json)
        .map_err(|e| Error::knowledge_base(format!("malformed disease catalog: {e}")))?;
    validate_catalog(&records)?;
    Ok(records)
}

/// Check catalog-level invariants
pub fn validate_catalog(records: &[DiseaseRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(Error::knowledge_base(format!(
                "disease at position {position} has an empty id"
            )));
        }
        if record.symptom_text.trim().is_empty() {
            return Err(Error::knowledge_base(format!(
                "disease '{}' has an empty symptom_text",
                record.id
            )));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(Error::knowledge_base(format!(
                "duplicate disease id '{}'",
                record.id
            )));
        }
    }
    Ok(())
}
