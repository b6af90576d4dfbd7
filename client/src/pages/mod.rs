//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration (timers, backend calls,
//! navigation) and delegates decisions to `state` so they stay testable.

pub mod dashboard;
pub mod login;
pub mod login_success;
pub mod not_found;
