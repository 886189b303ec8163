//! Tests for the disease record entity

use symdx_domain::entities::DiseaseRecord;
use symdx_domain::value_objects::DiagnosisResult;

fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "id": "dengue",
        "name": "Dengue Fever",
        "symptom_text": "sudden high fever, severe headache, pain behind the eyes, joint and muscle pain, rash",
        "red_flags": ["bleeding gums", "persistent vomiting"],
        "triage": "Check platelet count; refer if warning signs",
        "medications": ["Paracetamol", "Oral rehydration salts"],
        "contraindications": ["Avoid aspirin and NSAIDs"]
    })
}

#[test]
fn test_disease_record_deserializes() {
    let record: DiseaseRecord = serde_json::from_value(sample_json()).unwrap();
    assert_eq!(record.id, "dengue");
    assert_eq!(record.red_flags.len(), 2);
    assert_eq!(record.contraindications[0], "Avoid aspirin and NSAIDs");
}

#[test]
fn test_missing_field_is_rejected() {
    let mut json = sample_json();
    json.as_object_mut().unwrap().remove("triage");
    let result: Result<DiseaseRecord, _> = serde_json::from_value(json);
    assert!(result.is_err());
}

#[test]
fn test_diagnosis_result_copies_static_fields() {
    let record: DiseaseRecord = serde_json::from_value(sample_json()).unwrap();
    let result = DiagnosisResult::from_record(&record, 87);

    assert_eq!(result.id, record.id);
    assert_eq!(result.name, record.name);
    assert_eq!(result.confidence, 87);
    assert_eq!(result.red_flags, record.red_flags);
    assert_eq!(result.triage, record.triage);
    assert_eq!(result.medications, record.medications);
    assert_eq!(result.contraindications, record.contraindications);
}
