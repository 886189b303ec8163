//! Disease knowledge base record

use serde::{Deserialize, Serialize};

/// Entity: Disease Record
///
/// One entry of the static disease catalog. The `symptom_text` is the
/// canonical description embedded once at initialization; the remaining
/// fields are copied verbatim into every diagnosis that selects this record.
///
/// Every field is required when deserializing, so a catalog entry with a
/// missing field fails the whole load instead of being skipped.
///
/// ## Example
///
/// ```rust
/// use symdx_domain::entities::DiseaseRecord;
///
/// let json = r#"{
///     "id": "malaria",
///     "name": "Malaria",
///     "symptom_text": "cyclic fever with chills and sweating",
///     "red_flags": ["confusion"],
///     "triage": "Test with RDT",
///     "medications": ["Artemether-lumefantrine"],
///     "contraindications": []
/// }"#;
/// let record: DiseaseRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.id, "malaria");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseRecord {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Canonical free-text description used to build the reference embedding
    pub symptom_text: String,
    /// Warning signs associated with this disease, in display order
    pub red_flags: Vec<String>,
    /// Recommended next step of care
    pub triage: String,
    /// Medication names, in display order
    pub medications: Vec<String>,
    /// Medication and treatment warnings, in display order
    pub contraindications: Vec<String>,
}
