//! Wire DTOs for the assistant backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads exactly so serde does the
//! validating: a response that does not match the contract fails to
//! decode and settles as an ordinary failure instead of leaking an
//! unexpected shape into the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of a chat request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question, already trimmed.
    pub query: String,
    /// Locale tag for the answer; this client always sends `"pl"`.
    pub language: String,
}

/// Successful body of a chat response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Answer text to append as a bot turn.
    pub response: String,
    /// Citation identifiers backing the answer. The backend may emit
    /// null entries; they are preserved here and dropped when the bot
    /// turn is built. A missing field is treated as no citations.
    #[serde(default)]
    pub sources: Vec<Option<String>>,
}
