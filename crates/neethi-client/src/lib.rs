//! # neethi-client - Backend Request Client
//!
//! Typed async access to the legal-services backend. One method per
//! endpoint, each making exactly one HTTP attempt with transport defaults.
//!
//! Depends on [`neethi_core`] for the payload types.
//!
//! ## Public API
//!
//! - [`LegalServices`] - Async trait the app layer calls (one method per endpoint)
//! - [`HttpLegalServices`] - `reqwest` implementation against a base URL
//! - [`ClientError`] - Transport, status, and decode failures
//! - [`endpoints`] - Path builders shared by the client and its tests
//!
//! With the `test-helpers` feature, [`test_utils`] provides a scripted
//! in-process fake and a local HTTP stub.

pub mod api;
pub mod client;
pub mod endpoints;
pub mod error;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{LegalServices, LocalLegalServices};
pub use client::{HttpLegalServices, DEFAULT_BASE_URL};
pub use error::ClientError;
