//! Client-side page state and the flows that drive it.
//!
//! DESIGN
//! ======
//! `dashboard` is a pure state machine; `session` runs the backend calls
//! through the `SessionApi` capability and produces its transitions. Neither
//! touches the DOM, so both are exercised directly by unit tests.

pub mod dashboard;
pub mod session;
