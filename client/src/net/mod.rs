//! Networking modules for the backend session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the session capability and its HTTP implementation; `types`
//! defines the wire schema returned by `/auth/me`.

pub mod api;
pub mod types;
