//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates the interactive
//! pieces to `components`.

pub mod assistant;
