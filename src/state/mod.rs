//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by workflow (`chat`, `upload`) so each panel depends on
//! one small focused model. Transitions are plain methods on plain
//! structs: a `begin_*` method decides whether a request may start, the
//! component layer performs the network side effect, and a
//! `complete_*`/`fail_*` method settles the outcome. Nothing here touches
//! the DOM, so the full request lifecycle is testable natively.

pub mod chat;
pub mod upload;
