//! Networking modules for the backend HTTP contracts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the chat and ingestion calls, `types` defines the shared
//! wire schema. Real requests only exist under the `hydrate` feature;
//! other builds compile stubs so the rest of the crate stays portable.

pub mod api;
pub mod types;
