//! # Gate Test Utilities
//!
//! Shared test utilities for the edge gate service.
//!
//! This crate provides:
//! - Fake session stores and a recording auth delegate (`fakes`)
//! - Server test harness (`TestGateServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gate_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestGateServer::spawn_anonymous().await?;
//!
//!     let response = server
//!         .client()
//!         .get(format!("{}/en/pricing", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod fakes;
pub mod server_harness;

// Re-export commonly used items
pub use fakes::*;
pub use server_harness::*;
