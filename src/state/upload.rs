//! Ingestion-workflow state: artifact selection and the upload lifecycle.
//!
//! DESIGN
//! ======
//! The machine tracks the selected artifact by name only; the live
//! `web_sys::File` handle stays in the picker input and is read back when
//! the upload starts. That keeps every transition here free of browser
//! types and natively testable, while the name is still enough for the
//! extension allow-list and the no-file validation.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Validation message for a missing or unsupported artifact.
pub const CHOOSE_FILE_MESSAGE: &str = "Wybierz plik PDF, CSV lub HTML.";

/// Filename extensions the picker accepts, lowercase.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "csv", "html"];

/// Whether `name` carries one of the supported artifact extensions,
/// compared case-insensitively. The backend stays the final authority;
/// this mirrors the picker's `accept` filter for selections that arrive
/// by other paths.
#[must_use]
pub fn is_supported_artifact(name: &str) -> bool {
    let Some((_, extension)) = name.rsplit_once('.') else {
        return false;
    };
    let extension = extension.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&extension.as_str())
}

/// Ingestion-workflow state for one page lifetime.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Name of the currently selected artifact, if any.
    pub artifact_name: Option<String>,
    /// Raw backend payload from the last successful upload, displayed
    /// verbatim and never interpreted.
    pub result: Option<serde_json::Value>,
    /// True exactly while an upload request is outstanding.
    pub busy: bool,
    /// Message from the most recent failed or rejected attempt.
    pub error: Option<String>,
}

impl UploadState {
    /// Record a newly picked artifact, discarding the previous outcome.
    ///
    /// A name outside the supported-extension allow-list clears the
    /// selection instead and surfaces the validation message, so the
    /// machine never holds a selection it would refuse to submit.
    pub fn select_artifact(&mut self, name: &str) {
        self.result = None;
        self.error = None;
        if is_supported_artifact(name) {
            self.artifact_name = Some(name.to_owned());
        } else {
            self.artifact_name = None;
            self.error = Some(CHOOSE_FILE_MESSAGE.to_owned());
        }
    }

    /// Drop the selection and its outcome (the picker was cancelled).
    pub fn clear_artifact(&mut self) {
        self.artifact_name = None;
        self.result = None;
        self.error = None;
    }

    /// Start an upload of the selected artifact.
    ///
    /// Returns `false` without starting anything while a request is in
    /// flight, or when nothing is selected; the latter also surfaces the
    /// validation message. On `true` the caller must issue exactly one
    /// ingestion call and settle it with [`complete_upload`] or
    /// [`fail_upload`].
    ///
    /// [`complete_upload`]: UploadState::complete_upload
    /// [`fail_upload`]: UploadState::fail_upload
    #[must_use]
    pub fn begin_upload(&mut self) -> bool {
        if self.busy {
            return false;
        }
        if self.artifact_name.is_none() {
            self.error = Some(CHOOSE_FILE_MESSAGE.to_owned());
            return false;
        }
        self.error = None;
        self.busy = true;
        true
    }

    /// Settle the in-flight upload with the backend's report.
    pub fn complete_upload(&mut self, report: serde_json::Value) {
        self.result = Some(report);
        self.busy = false;
    }

    /// Settle the in-flight upload as failed. The selection survives so
    /// the user can retry the same artifact.
    pub fn fail_upload(&mut self, message: String) {
        self.error = Some(message);
        self.busy = false;
    }
}
