//! Production adapters for the gate's external capabilities.

mod auth_proxy;
mod session_client;

pub use auth_proxy::HttpAuthDelegate;
pub use session_client::HttpSessionStore;
