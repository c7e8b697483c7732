//! # neethi-core - Core Domain Types
//!
//! Foundation crate for Neethi. Provides the backend payload types, the
//! derived display helpers, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Chat (`chat`)
//! - [`ChatTurn`] - One entry of the conversation
//! - [`ChatRequest`], [`ChatReply`] - `/chat` wire payloads
//!
//! ### eCourts (`case_status`)
//! - [`CaseRecord`] - A case as returned by the backend
//! - [`CaseStatusResponse`], [`CaseOutcome`] - Raw and classified lookup results
//!
//! ### Legal Aid (`eligibility`)
//! - [`EligibilityForm`] - Form snapshot posted to the backend
//! - [`EligibilityVerdict`] - Backend decision
//!
//! ### Tele-Law (`tele_law`)
//! - [`Lawyer`], [`LawyerListing`], [`ConnectReply`]
//!
//! ### Judicial Data Grid (`njdg`)
//! - [`NjdgStats`] - Aggregate pendency payload
//! - [`NjdgDisplay`] - Every string the dashboard renders, derived purely
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; [`Error::is_fatal`] separates session-ending failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use neethi_core::prelude::*;
//! ```

pub mod case_status;
pub mod chat;
pub mod content;
pub mod eligibility;
pub mod error;
pub mod health;
pub mod logging;
pub mod njdg;
pub mod prelude;
pub mod tele_law;

// Re-export commonly used types at crate root for convenience
pub use case_status::{is_valid_cnr, CaseOutcome, CaseRecord, CaseStatusResponse};
pub use chat::{ChatReply, ChatRequest, ChatTurn, Sender};
pub use eligibility::{parse_income, CaseType, EligibilityForm, EligibilityVerdict, IndianState};
pub use error::{Error, Result, ResultExt};
pub use health::{BackendStatus, HealthStatus};
pub use njdg::{LakhScale, NjdgDisplay, NjdgResponse, NjdgStats, StateBar, StatePendency};
pub use tele_law::{ConnectReply, Lawyer, LawyerId, LawyerListing};
