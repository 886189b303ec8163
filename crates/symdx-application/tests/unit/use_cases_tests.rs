//! Tests for the diagnosis use case

use std::sync::Arc;
use std::time::Duration;

use symdx_application::domain_services::TextEmbedder;
use symdx_application::ports::DiagnosisServiceInterface;
use symdx_application::use_cases::DiagnosisServiceImpl;
use symdx_domain::entities::DiseaseRecord;
use symdx_domain::value_objects::{Severity, VitalsInput};
use symdx_providers::knowledge_base::InMemoryKnowledgeBase;

use crate::support::{CountingLoader, catalog, disease};

fn service(diseases: Vec<DiseaseRecord>) -> (DiagnosisServiceImpl, Arc<CountingLoader>) {
    let loader = Arc::new(CountingLoader::new());
    let embedder = TextEmbedder::new(
        loader.clone(),
        Arc::new(InMemoryKnowledgeBase::new(diseases)),
    );
    (DiagnosisServiceImpl::new(Arc::new(embedder)), loader)
}

#[tokio::test]
async fn test_returns_top_three_by_default() {
    let (service, _) = service(catalog());
    let report = service
        .perform_diagnosis("fever and chills", &VitalsInput::new())
        .await
        .unwrap();

    assert_eq!(report.diagnoses.len(), 3);
    assert!(report.red_flags.is_empty());
    let confidences: Vec<u8> = report.diagnoses.iter().map(|d| d.confidence).collect();
    assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_identical_text_ranks_first_with_full_confidence() {
    let (service, _) = service(catalog());
    let report = service
        .perform_diagnosis(
            "cough with sputum and shortness of breath",
            &VitalsInput::new(),
        )
        .await
        .unwrap();

    let primary = report.primary().unwrap();
    assert_eq!(primary.id, "pneumonia");
    assert_eq!(primary.confidence, 100);
    assert_eq!(primary.triage, "pneumonia triage");
    assert_eq!(primary.medications, vec!["pneumonia medication".to_string()]);
}

#[tokio::test]
async fn test_small_catalog_returns_every_entry() {
    let (service, _) = service(vec![
        disease("a", "fever"),
        disease("b", "rash"),
    ]);
    let report = service
        .perform_diagnosis("fever", &VitalsInput::new())
        .await
        .unwrap();
    assert_eq!(report.diagnoses.len(), 2);
    assert_eq!(report.diagnoses[0].id, "a");
}

#[tokio::test]
async fn test_empty_catalog_gives_empty_diagnoses() {
    let (service, _) = service(vec![]);
    let report = service
        .perform_diagnosis("fever", &VitalsInput::new().with_spo2(85.0))
        .await
        .unwrap();
    assert!(report.diagnoses.is_empty());
    assert_eq!(report.red_flags.len(), 1);
}

#[tokio::test]
async fn test_empty_symptoms_still_rank() {
    let (service, _) = service(catalog());
    let report = service
        .perform_diagnosis("", &VitalsInput::new())
        .await
        .unwrap();

    assert_eq!(report.diagnoses.len(), 3);
    assert!(report.diagnoses.iter().all(|d| d.confidence == 0));
    // Equal scores keep catalog order
    let ids: Vec<&str> = report.diagnoses.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["malaria", "pneumonia", "gastroenteritis"]);
}

#[tokio::test]
async fn test_red_flags_accompany_diagnoses() {
    let (service, _) = service(catalog());
    let vitals = VitalsInput::new().with_bp_systolic(200.0).with_pulse(130.0);
    let report = service
        .perform_diagnosis("headache", &vitals)
        .await
        .unwrap();

    let conditions: Vec<&str> = report.red_flags.iter().map(|a| a.condition.as_str()).collect();
    assert_eq!(conditions, vec!["Hypertensive Crisis", "Tachycardia"]);
    assert_eq!(report.highest_severity(), Some(Severity::High));
}

#[tokio::test]
async fn test_lazy_initialization_happens_once() {
    let (service, loader) = service(catalog());
    assert!(!service.is_ready());

    for _ in 0..3 {
        service
            .perform_diagnosis("cough", &VitalsInput::new())
            .await
            .unwrap();
    }

    assert!(service.is_ready());
    assert_eq!(loader.load_count(), 1);
    assert_eq!(loader.texts_embedded(), catalog().len() + 3);
}

#[tokio::test]
async fn test_custom_top_k() {
    let (service, _) = service(catalog());
    let service = service.with_top_k(5);
    let report = service
        .perform_diagnosis("fever", &VitalsInput::new())
        .await
        .unwrap();
    assert_eq!(report.diagnoses.len(), 5);
}

#[tokio::test]
async fn test_zero_top_k_still_returns_best_match() {
    let (service, _) = service(catalog());
    let service = service.with_top_k(0);
    let report = service
        .perform_diagnosis("cyclic fever with chills and sweating", &VitalsInput::new())
        .await
        .unwrap();
    assert_eq!(report.diagnoses.len(), 1);
    assert_eq!(report.diagnoses[0].id, "malaria");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_diagnoses_share_one_initialization() {
    let loader = Arc::new(CountingLoader::new().with_delay(Duration::from_millis(50)));
    let embedder = TextEmbedder::new(
        loader.clone(),
        Arc::new(InMemoryKnowledgeBase::new(catalog())),
    );
    let service = Arc::new(DiagnosisServiceImpl::new(Arc::new(embedder)));

    let queries = [
        ("cyclic fever with chills and sweating", "malaria"),
        ("cough with sputum and shortness of breath", "pneumonia"),
        ("watery diarrhea vomiting and stomach cramps", "gastroenteritis"),
        ("itchy red rash on the skin", "dermatitis"),
    ];

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = Arc::clone(&service);
        let (text, expected) = queries[i % queries.len()];
        handles.push(tokio::spawn(async move {
            let report = service
                .perform_diagnosis(text, &VitalsInput::new())
                .await
                .unwrap();
            (report, expected)
        }));
    }

    for handle in handles {
        let (report, expected) = handle.await.unwrap();
        assert_eq!(report.diagnoses.len(), 3);
        assert_eq!(report.diagnoses[0].id, expected);
    }

    assert!(service.is_ready());
    assert_eq!(loader.load_count(), 1);
    assert_eq!(loader.texts_embedded(), catalog().len() + 16);
}

#[tokio::test]
async fn test_failed_initialization_surfaces_and_recovers() {
    let loader = Arc::new(CountingLoader::failing_first(1));
    let embedder = TextEmbedder::new(
        loader.clone(),
        Arc::new(InMemoryKnowledgeBase::new(catalog())),
    );
    let service = DiagnosisServiceImpl::new(Arc::new(embedder));

    let err = service
        .perform_diagnosis("fever", &VitalsInput::new())
        .await
        .unwrap_err();
    assert!(err.is_initialization());

    let report = service
        .perform_diagnosis("fever", &VitalsInput::new())
        .await
        .unwrap();
    assert_eq!(report.diagnoses.len(), 3);
}
