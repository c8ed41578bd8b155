use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn chat_endpoint_targets_the_backend() {
    assert_eq!(chat_endpoint(), "http://localhost:8000/chat");
}

#[test]
fn upload_endpoint_targets_the_backend() {
    assert_eq!(upload_endpoint(), "http://localhost:8000/upload");
}

// =============================================================
// Constants
// =============================================================

#[test]
fn chat_queries_are_answered_in_polish() {
    assert_eq!(QUERY_LANGUAGE, "pl");
}

#[test]
fn failure_messages_are_distinct_per_contract() {
    assert!(!CHAT_FAILED_MESSAGE.is_empty());
    assert!(!UPLOAD_FAILED_MESSAGE.is_empty());
    assert_ne!(CHAT_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE);
}
