//! eCourts case-status lookup state

use neethi_core::case_status::{is_valid_cnr, DEMO_CNR, MAX_CNR_LEN};
use neethi_core::CaseOutcome;

use crate::fetch_state::{FeatureError, SlotResult};

pub const INVALID_CNR_MESSAGE: &str = "Please enter a valid 16-character CNR number.";
pub const CASE_FETCH_FAILED_MESSAGE: &str = "Failed to fetch case status. Please try again.";

/// A lookup ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseQuery {
    /// Token to hand back with the completion
    pub request_id: u64,
    pub cnr: String,
}

/// CNR input plus the last settled lookup
///
/// The previous result stays visible while a new lookup is in flight.
#[derive(Debug, Clone, Default)]
pub struct CaseLookupState {
    pub cnr_input: String,
    pub result: Option<SlotResult<CaseOutcome>>,
    pub loading: bool,
    /// CNR that `result` answers
    pub result_cnr: String,
    latest_request: u64,
    /// Bumped whenever `result` is written
    revision: u64,
}

impl CaseLookupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character, upper-cased, up to the field limit
    pub fn push_char(&mut self, c: char) {
        for upper in c.to_uppercase() {
            if self.cnr_input.chars().count() >= MAX_CNR_LEN {
                break;
            }
            self.cnr_input.push(upper);
        }
    }

    pub fn backspace(&mut self) {
        self.cnr_input.pop();
    }

    /// Replace the input wholesale, applying the same rules as typing
    pub fn set_input(&mut self, value: &str) {
        self.cnr_input.clear();
        for c in value.chars() {
            self.push_char(c);
        }
    }

    /// Fill in the CNR the backend serves demo data for
    pub fn insert_demo_cnr(&mut self) {
        self.set_input(DEMO_CNR);
    }

    /// Validate the input and start a lookup
    ///
    /// Every search supersedes the lookups issued before it. A short CNR
    /// records a validation error and returns `None`; no request may be
    /// made in that case.
    pub fn search(&mut self) -> Option<CaseQuery> {
        self.latest_request += 1;
        if !is_valid_cnr(&self.cnr_input) {
            self.result = Some(Err(FeatureError::Validation(INVALID_CNR_MESSAGE.to_string())));
            self.result_cnr = self.cnr_input.clone();
            self.loading = false;
            self.revision += 1;
            return None;
        }
        self.loading = true;
        Some(CaseQuery {
            request_id: self.latest_request,
            cnr: self.cnr_input.clone(),
        })
    }

    /// Apply a completed lookup
    ///
    /// Completions from superseded lookups are dropped so the newest
    /// search always wins. Returns whether the completion was applied.
    pub fn complete<E>(
        &mut self,
        request_id: u64,
        cnr: &str,
        result: Result<CaseOutcome, E>,
    ) -> bool {
        if request_id != self.latest_request {
            tracing::debug!(
                request_id,
                latest = self.latest_request,
                "Discarding stale case-status completion"
            );
            return false;
        }
        self.result = Some(
            result.map_err(|_| FeatureError::Request(CASE_FETCH_FAILED_MESSAGE.to_string())),
        );
        self.result_cnr = cnr.to_string();
        self.loading = false;
        self.revision += 1;
        true
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neethi_core::CaseRecord;

    fn found() -> CaseOutcome {
        CaseOutcome::Found {
            record: CaseRecord {
                cnr: DEMO_CNR.into(),
                ..Default::default()
            },
            is_demo: true,
        }
    }

    #[test]
    fn test_input_uppercased_and_capped() {
        let mut state = CaseLookupState::new();
        for c in "dlct0100123456720241234".chars() {
            state.push_char(c);
        }
        assert_eq!(state.cnr_input, "DLCT0100123456720241");
        assert_eq!(state.cnr_input.len(), MAX_CNR_LEN);
    }

    #[test]
    fn test_short_cnr_rejected_without_request() {
        let mut state = CaseLookupState::new();
        state.set_input("DLCT01001234567");

        assert!(state.search().is_none());
        assert!(!state.loading);
        assert_eq!(state.result_cnr, "DLCT01001234567");
        match &state.result {
            Some(Err(FeatureError::Validation(msg))) => assert_eq!(msg, INVALID_CNR_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_sixteen_chars_accepted() {
        let mut state = CaseLookupState::new();
        state.set_input("DLCT010012345672");
        let query = state.search().unwrap();
        assert_eq!(query.cnr, "DLCT010012345672");
        assert_eq!(query.request_id, 1);
        assert!(state.loading);
    }

    #[test]
    fn test_completion_replaces_result() {
        let mut state = CaseLookupState::new();
        state.insert_demo_cnr();
        let query = state.search().unwrap();

        assert!(state.complete::<()>(query.request_id, &query.cnr, Ok(found())));
        assert!(!state.loading);
        assert!(matches!(state.result, Some(Ok(CaseOutcome::Found { .. }))));
        assert_eq!(state.result_cnr, DEMO_CNR);
    }

    #[test]
    fn test_failure_uses_fixed_message() {
        let mut state = CaseLookupState::new();
        state.insert_demo_cnr();
        let query = state.search().unwrap();

        state.complete(query.request_id, &query.cnr, Err("timeout"));
        assert_eq!(
            state.result,
            Some(Err(FeatureError::Request(CASE_FETCH_FAILED_MESSAGE.into())))
        );
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut state = CaseLookupState::new();
        state.insert_demo_cnr();
        let first = state.search().unwrap();
        let second = state.search().unwrap();

        assert!(state.complete::<()>(second.request_id, &second.cnr, Ok(found())));
        assert!(!state.complete(first.request_id, &first.cnr, Err("late failure")));
        assert!(matches!(state.result, Some(Ok(CaseOutcome::Found { .. }))));
    }

    #[test]
    fn test_rejected_search_supersedes_pending_lookup() {
        let mut state = CaseLookupState::new();
        state.insert_demo_cnr();
        let pending = state.search().unwrap();

        state.set_input("SHORT");
        assert!(state.search().is_none());
        assert!(!state.loading);

        assert!(!state.complete::<()>(pending.request_id, &pending.cnr, Ok(found())));
        assert!(matches!(state.result, Some(Err(FeatureError::Validation(_)))));
        assert_eq!(state.result_cnr, "SHORT");
    }

    #[test]
    fn test_previous_result_visible_while_loading() {
        let mut state = CaseLookupState::new();
        state.insert_demo_cnr();
        let query = state.search().unwrap();
        state.complete::<()>(query.request_id, &query.cnr, Ok(found()));

        state.search().unwrap();
        assert!(state.loading);
        assert!(state.result.is_some());
    }
}
