//! Per-feature result slots
//!
//! A slot holds either a payload or an error, never both. Failures stay in
//! their own slot and never reach another feature.

use std::fmt;

/// Why a feature has no payload to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// Input was rejected before any request was made
    Validation(String),
    /// The request failed or the response was unusable
    Request(String),
}

impl FeatureError {
    pub fn message(&self) -> &str {
        match self {
            FeatureError::Validation(m) | FeatureError::Request(m) => m,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FeatureError::Validation(_))
    }
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Slot for a payload fetched once on first display
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(FeatureError),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FeatureError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The settled outcome, if the slot has settled
    pub fn settled(&self) -> Option<SlotResult<T>>
    where
        T: Clone,
    {
        match self {
            FetchState::Loaded(value) => Some(Ok(value.clone())),
            FetchState::Failed(err) => Some(Err(err.clone())),
            FetchState::Idle | FetchState::Loading => None,
        }
    }

    /// Settle the slot from a request outcome
    pub fn settle<E>(&mut self, result: Result<T, E>, failure_message: &str) {
        *self = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(_) => FetchState::Failed(FeatureError::Request(failure_message.to_string())),
        };
    }
}

/// Last settled result of a user-submitted request
pub type SlotResult<T> = Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_success() {
        let mut slot: FetchState<u32> = FetchState::Loading;
        slot.settle::<()>(Ok(3), "failed");
        assert_eq!(slot.loaded(), Some(&3));
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_settle_failure_uses_fixed_message() {
        let mut slot: FetchState<u32> = FetchState::Loading;
        slot.settle(Err("socket closed"), "Unable to load.");
        assert_eq!(slot.error(), Some(&FeatureError::Request("Unable to load.".into())));
        assert!(slot.loaded().is_none());
    }

    #[test]
    fn test_default_is_idle() {
        assert!(FetchState::<u32>::default().is_idle());
    }
}
