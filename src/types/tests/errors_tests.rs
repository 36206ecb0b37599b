use crate::types::errors::TriageError;

#[test]
fn test_triage_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.json missing");
    let err = TriageError::from(io_err);

    match err {
        TriageError::Io(msg) => {
            assert!(msg.contains("catalog.json missing"));
        }
        _ => panic!("Expected TriageError::Io"),
    }
}

#[test]
fn test_triage_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
    assert!(matches!(TriageError::from(json_err), TriageError::Parse(_)));
}

#[test]
fn test_triage_error_serialization() {
    let err = TriageError::InvalidRecord {
        index: 3,
        reason: "missing name".to_string(),
    };

    // TriageError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Invalid record #3: missing name\"");
}
