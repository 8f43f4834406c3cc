//! Axum middleware wiring for the request gate.

mod gate;

pub use gate::request_gate;
