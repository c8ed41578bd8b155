//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each panel binds one state machine from context to its markup and
//! event handlers; the machines themselves never touch the DOM.

pub mod chat_panel;
pub mod upload_panel;
