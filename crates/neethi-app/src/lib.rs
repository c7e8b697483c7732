//! neethi-app - Application state and orchestration for Neethi
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine abstraction shared by the terminal and headless
//! front ends, and configuration loading.

pub mod actions;
pub mod case_lookup;
pub mod config;
pub mod conversation;
pub mod eligibility;
pub mod engine;
pub mod engine_event;
pub mod fetch_state;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod njdg;
pub mod process;
pub mod signals;
pub mod state;
pub mod tele_law;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use fetch_state::{FeatureError, FetchState, SlotResult};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Notice, Page, UiMode};
