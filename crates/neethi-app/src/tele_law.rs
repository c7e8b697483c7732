//! Tele-Law lawyer directory state

use neethi_core::{ConnectReply, Lawyer, LawyerId, LawyerListing};

use crate::fetch_state::FetchState;

pub const LAWYERS_FAILED_MESSAGE: &str = "Unable to load lawyer list. Please try again later.";
pub const CONNECT_FAILED_MESSAGE: &str = "Connection failed. Please try again.";

/// Directory listing, selection cursor, and the connects in flight
#[derive(Debug, Clone, Default)]
pub struct LawyerDirectoryState {
    pub listing: FetchState<LawyerListing>,
    pub selected: usize,
    /// Lawyers whose connect request is pending, oldest first
    connecting: Vec<LawyerId>,
}

impl LawyerDirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the listing as loading if it has never been requested
    ///
    /// Returns whether a fetch should be issued. The directory is fetched
    /// once per run; later visits reuse whatever settled.
    pub fn begin_load(&mut self) -> bool {
        if self.listing.is_idle() {
            self.listing = FetchState::Loading;
            true
        } else {
            false
        }
    }

    pub fn complete_load<E>(&mut self, result: Result<LawyerListing, E>) {
        self.listing.settle(result, LAWYERS_FAILED_MESSAGE);
        self.selected = 0;
    }

    pub fn lawyers(&self) -> &[Lawyer] {
        self.listing
            .loaded()
            .map(|l| l.lawyers.as_slice())
            .unwrap_or(&[])
    }

    pub fn select_next(&mut self) {
        let len = self.lawyers().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_lawyer(&self) -> Option<&Lawyer> {
        self.lawyers().get(self.selected)
    }

    /// Start connecting to the selected lawyer
    ///
    /// Returns `None` when nothing is selected or that lawyer's request is
    /// already pending.
    pub fn begin_connect(&mut self) -> Option<LawyerId> {
        let id = self.selected_lawyer()?.id.clone();
        self.begin_connect_to(id)
    }

    /// Start connecting to a lawyer by id, listed or not
    pub fn begin_connect_to(&mut self, id: LawyerId) -> Option<LawyerId> {
        if self.is_connecting(&id) {
            return None;
        }
        self.connecting.push(id.clone());
        Some(id)
    }

    /// Clear the pending connect and produce the notice to show
    ///
    /// The listing is never touched.
    pub fn complete_connect<E>(&mut self, id: &LawyerId, result: Result<ConnectReply, E>) -> String {
        self.connecting.retain(|pending| pending != id);
        match result {
            Ok(reply) => reply.message,
            Err(_) => CONNECT_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_connecting(&self, id: &LawyerId) -> bool {
        self.connecting.contains(id)
    }

    pub fn has_pending_connects(&self) -> bool {
        !self.connecting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> LawyerListing {
        serde_json::from_value(serde_json::json!({
            "total": 2,
            "available_now": 1,
            "lawyers": [
                {"id": 7, "name": "Adv. Priya Sharma", "available": true},
                {"id": "LAW002", "name": "Adv. Rajesh Kumar", "available": false, "next_available": "2:30 PM"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_load_only_once() {
        let mut state = LawyerDirectoryState::new();
        assert!(state.begin_load());
        assert!(!state.begin_load());
        state.complete_load::<()>(Ok(listing()));
        assert!(!state.begin_load());
    }

    #[test]
    fn test_failed_load_not_retried() {
        let mut state = LawyerDirectoryState::new();
        state.begin_load();
        state.complete_load(Err(()));
        assert_eq!(
            state.listing.error().map(|e| e.message()),
            Some(LAWYERS_FAILED_MESSAGE)
        );
        assert!(!state.begin_load());
    }

    #[test]
    fn test_selection_clamped() {
        let mut state = LawyerDirectoryState::new();
        state.begin_load();
        state.complete_load::<()>(Ok(listing()));
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_connect_failure_leaves_listing_untouched() {
        let mut state = LawyerDirectoryState::new();
        state.begin_load();
        state.complete_load::<()>(Ok(listing()));

        let id = state.begin_connect().unwrap();
        assert_eq!(id, LawyerId::Number(7));
        assert!(state.is_connecting(&id));
        assert!(state.begin_connect().is_none());

        let notice = state.complete_connect(&id, Err(()));
        assert_eq!(notice, CONNECT_FAILED_MESSAGE);
        assert!(!state.has_pending_connects());
        assert_eq!(state.listing.loaded().unwrap().available_now, 1);
    }

    #[test]
    fn test_connect_success_surfaces_server_message() {
        let mut state = LawyerDirectoryState::new();
        let id = state.begin_connect_to(LawyerId::from("LAW002")).unwrap();
        let notice = state.complete_connect::<()>(
            &id,
            Ok(ConnectReply {
                message: "You are #2 in queue".into(),
                ..Default::default()
            }),
        );
        assert_eq!(notice, "You are #2 in queue");
    }

    #[test]
    fn test_overlapping_connects_tracked_separately() {
        let mut state = LawyerDirectoryState::new();
        let first = state.begin_connect_to(LawyerId::Number(7)).unwrap();
        let second = state.begin_connect_to(LawyerId::from("LAW002")).unwrap();
        assert!(state.is_connecting(&first));
        assert!(state.is_connecting(&second));

        state.complete_connect(&second, Err(()));
        assert!(state.is_connecting(&first));
        assert!(!state.is_connecting(&second));
        assert!(state.has_pending_connects());

        state.complete_connect(&first, Err(()));
        assert!(!state.has_pending_connects());
    }

    #[test]
    fn test_begin_connect_without_listing() {
        let mut state = LawyerDirectoryState::new();
        assert!(state.begin_connect().is_none());
    }
}
