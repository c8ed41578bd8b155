use serde_json::json;

use super::*;

fn with_selection(name: &str) -> UploadState {
    let mut state = UploadState::default();
    state.select_artifact(name);
    assert!(state.artifact_name.is_some(), "selection was rejected");
    state
}

// =============================================================
// Default state
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = UploadState::default();
    assert!(state.artifact_name.is_none());
    assert!(state.result.is_none());
    assert!(!state.busy);
    assert!(state.error.is_none());
}

// =============================================================
// is_supported_artifact
// =============================================================

#[test]
fn supported_extensions_are_accepted() {
    assert!(is_supported_artifact("plan.pdf"));
    assert!(is_supported_artifact("oceny.csv"));
    assert!(is_supported_artifact("sylabus.html"));
}

#[test]
fn extension_check_ignores_case() {
    assert!(is_supported_artifact("PLAN.PDF"));
    assert!(is_supported_artifact("Sylabus.Html"));
}

#[test]
fn unsupported_extensions_are_rejected() {
    assert!(!is_supported_artifact("notatki.docx"));
    assert!(!is_supported_artifact("archiwum.zip"));
}

#[test]
fn names_without_an_extension_are_rejected() {
    assert!(!is_supported_artifact("README"));
    assert!(!is_supported_artifact("plan."));
}

// =============================================================
// select_artifact / clear_artifact
// =============================================================

#[test]
fn select_artifact_records_the_name() {
    let mut state = UploadState::default();
    state.select_artifact("plan.pdf");

    assert_eq!(state.artifact_name.as_deref(), Some("plan.pdf"));
    assert!(state.result.is_none());
    assert!(state.error.is_none());
}

#[test]
fn select_artifact_rejects_unsupported_names() {
    let mut state = UploadState::default();
    state.select_artifact("notatki.docx");

    assert!(state.artifact_name.is_none());
    assert_eq!(state.error.as_deref(), Some(CHOOSE_FILE_MESSAGE));
}

#[test]
fn select_artifact_discards_the_previous_outcome() {
    let mut state = with_selection("plan.pdf");
    assert!(state.begin_upload());
    state.complete_upload(json!({"status": "indexed"}));

    state.select_artifact("sylabus.csv");
    assert_eq!(state.artifact_name.as_deref(), Some("sylabus.csv"));
    assert!(state.result.is_none());
    assert!(state.error.is_none());
}

#[test]
fn clear_artifact_resets_selection_and_outcome() {
    let mut state = with_selection("plan.pdf");
    assert!(state.begin_upload());
    state.complete_upload(json!({"status": "indexed"}));

    state.clear_artifact();
    assert!(state.artifact_name.is_none());
    assert!(state.result.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// begin_upload
// =============================================================

#[test]
fn begin_upload_without_a_selection_is_rejected() {
    let mut state = UploadState::default();
    assert!(!state.begin_upload());
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some(CHOOSE_FILE_MESSAGE));
}

#[test]
fn begin_upload_with_a_selection_starts_the_request() {
    let mut state = with_selection("plan.pdf");
    state.error = Some("Błąd podczas przesyłania pliku".to_owned());

    assert!(state.begin_upload());
    assert!(state.busy);
    assert!(state.error.is_none());
}

#[test]
fn begin_upload_while_busy_is_rejected() {
    let mut state = with_selection("plan.pdf");
    assert!(state.begin_upload());
    assert!(!state.begin_upload());
    assert!(state.busy);
}

// =============================================================
// complete_upload / fail_upload
// =============================================================

#[test]
fn complete_upload_stores_the_report_verbatim() {
    let mut state = with_selection("plan.pdf");
    assert!(state.begin_upload());
    state.complete_upload(json!({"chunks": 12, "status": "indexed"}));

    assert_eq!(state.result, Some(json!({"chunks": 12, "status": "indexed"})));
    assert!(!state.busy);
    assert!(state.error.is_none());
    assert_eq!(state.artifact_name.as_deref(), Some("plan.pdf"));
}

#[test]
fn fail_upload_keeps_the_selection_for_retry() {
    let mut state = with_selection("plan.pdf");
    assert!(state.begin_upload());
    state.fail_upload("Błąd podczas przesyłania pliku".to_owned());

    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some("Błąd podczas przesyłania pliku"));
    assert_eq!(state.artifact_name.as_deref(), Some("plan.pdf"));
}

#[test]
fn fail_upload_leaves_an_earlier_report_in_place() {
    let mut state = with_selection("plan.pdf");
    assert!(state.begin_upload());
    state.complete_upload(json!({"status": "indexed"}));

    assert!(state.begin_upload());
    state.fail_upload("Błąd podczas przesyłania pliku".to_owned());

    assert_eq!(state.result, Some(json!({"status": "indexed"})));
    assert_eq!(state.error.as_deref(), Some("Błąd podczas przesyłania pliku"));
}
