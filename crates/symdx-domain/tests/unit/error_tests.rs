//! Tests for the domain error type

use symdx_domain::error::Error;

#[test]
fn test_initialization_error_display() {
    let err = Error::initialization("model download failed");
    assert_eq!(err.to_string(), "Initialization failed: model download failed");
    assert!(err.is_initialization());
}

#[test]
fn test_initialization_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "diseases.json");
    let err = Error::initialization_with_source("catalog missing", io);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_not_initialized_is_distinct() {
    let err = Error::NotInitialized;
    assert!(!err.is_initialization());
    assert_eq!(err.to_string(), "Embedder not initialized");
}

#[test]
fn test_json_error_conversion() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err: Error = parse.unwrap_err().into();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_constructor_variants() {
    assert!(matches!(Error::embedding("x"), Error::Embedding { .. }));
    assert!(matches!(Error::knowledge_base("x"), Error::KnowledgeBase { .. }));
    assert!(matches!(Error::invalid_input("x"), Error::InvalidInput { .. }));
    assert!(matches!(Error::configuration("x"), Error::Configuration { .. }));
    assert!(matches!(Error::internal("x"), Error::Internal { .. }));
    assert!(matches!(Error::io("x"), Error::Io { .. }));
}
