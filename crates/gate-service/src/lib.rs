//! HelloCity Edge Gate Service Library
//!
//! Per-request locale resolution and authentication gating for the HelloCity
//! front-end: canonicalizes locale path segments, inserts a negotiated locale
//! where one is missing, enforces sessions on protected prefixes, and hands
//! auth-provider traffic to an opaque delegate.
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `gate` - The five-step decision pipeline and its configuration
//! - `handlers` - HTTP request handlers
//! - `locale` - Supported locales and `Accept-Language` negotiation
//! - `middleware` - Axum wiring for the gate
//! - `routes` - Axum router setup
//! - `services` - Production session/delegate adapters
//! - `session` - Capability traits (session lookup, auth delegate)

pub mod config;
pub mod errors;
pub mod gate;
pub mod handlers;
pub mod locale;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod session;
