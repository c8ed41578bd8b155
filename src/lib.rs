//! # studyrag-client
//!
//! Leptos + WASM browser client for the study-programme RAG assistant.
//! The page pairs two independent workflows: a document-ingestion panel
//! that submits source files to the backend, and a chat panel that holds
//! a multi-turn conversation answered from the ingested material.
//!
//! All remote interaction goes through the two HTTP contracts in
//! [`net::api`]; everything stateful lives in [`state`] as plain structs
//! so the request lifecycles are testable natively, without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
