//! Judicial Data Grid dashboard state

use neethi_core::njdg::headline_pending;
use neethi_core::{LakhScale, NjdgDisplay, NjdgResponse};

use crate::fetch_state::FetchState;

pub const STATS_FAILED_MESSAGE: &str = "Unable to load statistics. Please try again later.";

/// Statistics slot shared by the dashboard and the home headline
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    pub stats: FetchState<NjdgResponse>,
}

impl StatsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a fetch should be issued (first request only)
    pub fn begin_load(&mut self) -> bool {
        if self.stats.is_idle() {
            self.stats = FetchState::Loading;
            true
        } else {
            false
        }
    }

    pub fn complete_load<E>(&mut self, result: Result<NjdgResponse, E>) {
        self.stats.settle(result, STATS_FAILED_MESSAGE);
    }

    /// Display strings for the dashboard, once data has arrived
    pub fn display(&self, scale: LakhScale) -> Option<NjdgDisplay> {
        self.stats
            .loaded()
            .and_then(|r| r.data.as_ref())
            .map(|stats| NjdgDisplay::derive(stats, scale))
    }

    /// Pending-case figure for the home page
    pub fn headline(&self) -> String {
        headline_pending(self.stats.loaded().and_then(|r| r.data.as_ref()))
    }

    pub fn demo_notice(&self) -> Option<&str> {
        self.stats.loaded().and_then(|r| r.demo_notice())
    }
}
