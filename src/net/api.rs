//! HTTP calls for the chat and ingestion contracts.
//!
//! Client-side (hydrate): real calls via `gloo-net`.
//! Server-side: stubs returning errors, since both endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-success status, or undecodable body)
//! maps to one fixed localized message per contract; the status code or
//! decode detail goes to the WARN log instead of the user. Failure
//! response bodies are never read.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::ChatReply;
#[cfg(feature = "hydrate")]
use crate::net::types::ChatRequest;

/// Base address of the assistant backend; fixed deployment constant.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "http://localhost:8000";

/// Locale tag sent with every chat query.
#[cfg(any(test, feature = "hydrate"))]
const QUERY_LANGUAGE: &str = "pl";

/// Localized message shown for any failed chat call.
#[cfg(any(test, feature = "hydrate"))]
const CHAT_FAILED_MESSAGE: &str = "Błąd odpowiedzi serwera";

/// Localized message shown for any failed upload call.
#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_FAILED_MESSAGE: &str = "Błąd podczas przesyłania pliku";

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint() -> String {
    format!("{API_BASE}/chat")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint() -> String {
    format!("{API_BASE}/upload")
}

/// Send one user query to the chat contract.
///
/// # Errors
///
/// Returns the localized chat failure message if the request cannot be
/// sent, the server answers with a non-success status, or the body does
/// not decode as a [`ChatReply`].
pub async fn send_chat_query(query: &str) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest {
            query: query.to_owned(),
            language: QUERY_LANGUAGE.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&chat_endpoint())
            .json(&payload)
            .map_err(|e| {
                log::warn!("chat request could not be built: {e}");
                CHAT_FAILED_MESSAGE.to_owned()
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("chat request failed to send: {e}");
                CHAT_FAILED_MESSAGE.to_owned()
            })?;
        if !resp.ok() {
            log::warn!("chat request rejected with status {}", resp.status());
            return Err(CHAT_FAILED_MESSAGE.to_owned());
        }
        resp.json::<ChatReply>().await.map_err(|e| {
            log::warn!("chat response did not match the contract: {e}");
            CHAT_FAILED_MESSAGE.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Upload one artifact's bytes and name to the ingestion contract.
///
/// The response body is kept verbatim; this client never interprets it.
///
/// # Errors
///
/// Returns the localized upload failure message if the multipart body
/// cannot be built, the request cannot be sent, the server answers with
/// a non-success status, or the body is not valid JSON.
#[cfg(feature = "hydrate")]
pub async fn upload_artifact(file: &web_sys::File) -> Result<serde_json::Value, String> {
    let form = web_sys::FormData::new().map_err(|e| {
        log::warn!("multipart form could not be created: {e:?}");
        UPLOAD_FAILED_MESSAGE.to_owned()
    })?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| {
            log::warn!("artifact could not be attached to the form: {e:?}");
            UPLOAD_FAILED_MESSAGE.to_owned()
        })?;
    let resp = gloo_net::http::Request::post(&upload_endpoint())
        .body(form)
        .map_err(|e| {
            log::warn!("upload request could not be built: {e}");
            UPLOAD_FAILED_MESSAGE.to_owned()
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("upload request failed to send: {e}");
            UPLOAD_FAILED_MESSAGE.to_owned()
        })?;
    if !resp.ok() {
        log::warn!("upload request rejected with status {}", resp.status());
        return Err(UPLOAD_FAILED_MESSAGE.to_owned());
    }
    resp.json::<serde_json::Value>().await.map_err(|e| {
        log::warn!("upload response was not valid JSON: {e}");
        UPLOAD_FAILED_MESSAGE.to_owned()
    })
}
