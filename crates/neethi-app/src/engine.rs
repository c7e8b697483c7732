//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the backend
//! services, and the event broadcaster. Both front ends drive it the same
//! way: receive a message, hand it to [`Engine::process_message`], then
//! render or emit.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::debug;

use neethi_client::{HttpLegalServices, LegalServices};
use neethi_core::BackendStatus;

use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, Page};

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to decide which
/// EngineEvents to emit.
#[derive(Debug, Clone)]
struct StateSnapshot {
    page: Page,
    turn_count: usize,
    case_revision: u64,
    eligibility_loading: bool,
    lawyers_loading: bool,
    stats_loading: bool,
    notices_shown: u64,
    backend: BackendStatus,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            page: state.page,
            turn_count: state.conversation.turns().len(),
            case_revision: state.case_lookup.revision(),
            eligibility_loading: state.eligibility.loading,
            lawyers_loading: state.lawyers.listing.is_loading(),
            stats_loading: state.stats.stats.is_loading(),
            notices_shown: state.notices_shown,
            backend: state.backend,
        }
    }
}

/// Orchestration engine for Neethi
pub struct Engine<S = HttpLegalServices> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (terminal events, stdin, signals).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    services: Arc<S>,

    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: LegalServices + Send + Sync + 'static,
{
    /// Create an engine around prepared state and a backend
    ///
    /// Must be called inside a tokio runtime; the signal handler is spawned
    /// here.
    pub fn new(state: AppState, services: Arc<S>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            services,
            shutdown_tx,
            shutdown_rx,
            event_tx,
        }
    }

    /// Issue the requests every session starts with
    ///
    /// The home page headline and the status indicator both need data
    /// before the user navigates anywhere.
    pub fn start(&mut self) {
        self.process_message(Message::LoadStats);
        self.process_message(Message::CheckHealth);
    }

    /// Subscribe to engine events.
    ///
    /// Subscribers that fall behind lose the oldest events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.services,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abandon in-flight requests and tell subscribers we are done
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        if self.shutdown_tx.send(true).is_err() {
            debug!("No request tasks were listening for shutdown");
        }
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        let state = &self.state;

        if pre.page != post.page {
            self.emit(EngineEvent::PageChanged { page: post.page });
        }

        if post.turn_count > pre.turn_count {
            for turn in &state.conversation.turns()[pre.turn_count..] {
                self.emit(EngineEvent::ChatTurnAdded { turn: turn.clone() });
            }
        }

        if post.case_revision != pre.case_revision {
            if let Some(result) = &state.case_lookup.result {
                self.emit(EngineEvent::CaseStatusSettled {
                    cnr: state.case_lookup.result_cnr.clone(),
                    result: result.clone(),
                });
            }
        }

        if pre.eligibility_loading && !post.eligibility_loading {
            if let Some(result) = &state.eligibility.result {
                self.emit(EngineEvent::EligibilitySettled {
                    result: result.clone(),
                });
            }
        }

        if pre.lawyers_loading && !post.lawyers_loading {
            if let Some(result) = state.lawyers.listing.settled() {
                self.emit(EngineEvent::LawyersSettled { result });
            }
        }

        if pre.stats_loading && !post.stats_loading {
            if let Some(result) = state.stats.stats.settled() {
                self.emit(EngineEvent::StatsSettled { result });
            }
        }

        if post.notices_shown > pre.notices_shown {
            if let Some(notice) = &state.notice {
                self.emit(EngineEvent::NoticeShown {
                    notice: notice.clone(),
                });
            }
        }

        if pre.backend != post.backend {
            self.emit(EngineEvent::BackendStatusChanged {
                status: post.backend,
            });
        }
    }

    /// send() only fails when nobody is subscribed
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use neethi_client::test_utils::{FakeBackend, FakeCall, FakeFailure};
    use neethi_core::case_status::DEMO_CNR;
    use neethi_core::{
        CaseOutcome, CaseStatusResponse, ChatReply, EligibilityForm, EligibilityVerdict,
        HealthStatus, LawyerId, LawyerListing, NjdgResponse, Sender,
    };

    use crate::fetch_state::FeatureError;
    use crate::state::UiMode;
    use crate::tele_law::CONNECT_FAILED_MESSAGE;

    fn engine(backend: FakeBackend) -> (Engine<FakeBackend>, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        (Engine::new(AppState::new(), backend.clone()), backend)
    }

    /// Receive and process `n` completions
    async fn settle(engine: &mut Engine<FakeBackend>, n: usize) {
        for _ in 0..n {
            let msg = tokio::time::timeout(Duration::from_secs(2), engine.msg_rx.recv())
                .await
                .expect("completion within timeout")
                .expect("channel open");
            engine.process_message(msg);
        }
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn case_response(cnr: &str) -> CaseStatusResponse {
        serde_json::from_value(serde_json::json!({
            "success": true,
            "source": "demo",
            "data": {"cnr": cnr, "case_number": "CS/123/2024", "status": "Pending"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let (mut engine, _) = engine(FakeBackend::new());
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let (mut engine, _) = engine(FakeBackend::new());
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_start_loads_stats_and_health() {
        let stats: NjdgResponse = serde_json::from_value(serde_json::json!({
            "data": {"total_pending_cases": 45234567},
            "source": "demo"
        }))
        .unwrap();
        let (mut engine, backend) = engine(
            FakeBackend::new()
                .with_njdg(Ok(stats))
                .with_health(Ok(HealthStatus {
                    status: "healthy".into(),
                    ollama: Some(true),
                })),
        );
        let mut events = engine.subscribe();

        engine.start();
        settle(&mut engine, 2).await;

        assert_eq!(engine.state.backend, BackendStatus::Online { ai: true });
        assert_eq!(engine.state.stats.headline(), "4.5 Cr");
        let mut calls = backend.calls();
        calls.sort_by_key(|c| format!("{:?}", c));
        assert_eq!(calls, vec![FakeCall::Health, FakeCall::NjdgStats]);

        let events = drain_events(&mut events);
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::StatsSettled { result: Ok(_) })));
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::BackendStatusChanged { .. })));
    }

    #[tokio::test]
    async fn test_health_failure_marks_offline() {
        let (mut engine, _) = engine(FakeBackend::new());
        engine.process_message(Message::CheckHealth);
        settle(&mut engine, 1).await;
        assert_eq!(engine.state.backend, BackendStatus::Offline);
    }

    #[tokio::test]
    async fn test_tele_law_question_adds_two_turns() {
        let (mut engine, backend) = engine(FakeBackend::new().with_chat(Ok(ChatReply {
            response: "Tele-Law connects citizens with panel lawyers.".into(),
            sources: Some(vec!["https://www.tele-law.in".into()]),
            intent: Some("tele_law".into()),
            ai_generated: Some(false),
        })));
        let mut events = engine.subscribe();

        engine.process_message(Message::SendChat("What is Tele-Law?".into()));
        assert_eq!(engine.state.conversation.turns().len(), 2);
        settle(&mut engine, 1).await;

        let turns = engine.state.conversation.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].sender, Sender::User);
        assert_eq!(turns[2].sender, Sender::Bot);
        assert_eq!(turns[2].sources, vec!["https://www.tele-law.in".to_string()]);
        assert_eq!(backend.calls(), vec![FakeCall::Chat("What is Tele-Law?".into())]);

        let added = drain_events(&mut events)
            .into_iter()
            .filter(|e| matches!(e, EngineEvent::ChatTurnAdded { .. }))
            .count();
        assert_eq!(added, 2);
    }

    #[tokio::test]
    async fn test_demo_cnr_lookup_is_found() {
        let (mut engine, _) = engine(FakeBackend::new().with_case(DEMO_CNR, Ok(case_response(DEMO_CNR))));

        engine.process_message(Message::InsertDemoCnr);
        engine.process_message(Message::SearchCase);
        assert!(engine.state.case_lookup.loading);
        settle(&mut engine, 1).await;

        assert!(!engine.state.case_lookup.loading);
        assert!(matches!(
            engine.state.case_lookup.result,
            Some(Ok(CaseOutcome::Found { is_demo: true, .. }))
        ));
    }

    #[tokio::test]
    async fn test_short_cnr_emits_validation_without_request() {
        let (mut engine, backend) = engine(FakeBackend::new());
        let mut events = engine.subscribe();

        engine.process_message(Message::SetCnr("DLCT0100".into()));
        engine.process_message(Message::SearchCase);
        engine.process_message(Message::SearchCase);

        assert!(backend.calls().is_empty());
        let rejected = drain_events(&mut events)
            .into_iter()
            .filter(|e| {
                matches!(
                    e,
                    EngineEvent::CaseStatusSettled {
                        result: Err(FeatureError::Validation(_)),
                        ..
                    }
                )
            })
            .count();
        assert_eq!(rejected, 2);
    }

    #[tokio::test]
    async fn test_newest_case_lookup_wins() {
        const SLOW: &str = "DLCT010012345672024";
        const FAST: &str = "MHAU019999992023";
        let (mut engine, _) = engine(
            FakeBackend::new()
                .with_case(SLOW, Ok(case_response(SLOW)))
                .with_case_delay(SLOW, Duration::from_millis(200))
                .with_case(FAST, Ok(case_response(FAST))),
        );

        engine.process_message(Message::SetCnr(SLOW.into()));
        engine.process_message(Message::SearchCase);
        engine.process_message(Message::SetCnr(FAST.into()));
        engine.process_message(Message::SearchCase);
        settle(&mut engine, 2).await;

        match &engine.state.case_lookup.result {
            Some(Ok(CaseOutcome::Found { record, .. })) => assert_eq!(record.cnr, FAST),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!engine.state.case_lookup.loading);
    }

    #[tokio::test]
    async fn test_rejected_search_outlives_slow_lookup() {
        const SLOW: &str = "DLCT010012345672024";
        let (mut engine, _) = engine(
            FakeBackend::new()
                .with_case(SLOW, Ok(case_response(SLOW)))
                .with_case_delay(SLOW, Duration::from_millis(100)),
        );
        let mut events = engine.subscribe();

        engine.process_message(Message::SetCnr(SLOW.into()));
        engine.process_message(Message::SearchCase);
        engine.process_message(Message::SetCnr("SHORT".into()));
        engine.process_message(Message::SearchCase);
        assert!(!engine.state.has_pending_requests());
        settle(&mut engine, 1).await;

        assert!(matches!(
            engine.state.case_lookup.result,
            Some(Err(FeatureError::Validation(_)))
        ));
        let settled: Vec<_> = drain_events(&mut events)
            .into_iter()
            .filter_map(|e| match e {
                EngineEvent::CaseStatusSettled { cnr, result } => Some((cnr, result.is_ok())),
                _ => None,
            })
            .collect();
        assert_eq!(settled, vec![("SHORT".to_string(), false)]);
    }

    #[tokio::test]
    async fn test_settled_event_names_queried_cnr() {
        let (mut engine, _) =
            engine(FakeBackend::new().with_case(DEMO_CNR, Ok(case_response(DEMO_CNR))));
        let mut events = engine.subscribe();

        engine.process_message(Message::InsertDemoCnr);
        engine.process_message(Message::SearchCase);
        engine.process_message(Message::SetCnr("MHAU".into()));
        settle(&mut engine, 1).await;

        assert!(drain_events(&mut events).iter().any(|e| matches!(
            e,
            EngineEvent::CaseStatusSettled { cnr, result: Ok(_) } if cnr == DEMO_CNR
        )));
    }

    #[tokio::test]
    async fn test_connect_failure_keeps_listing() {
        let listing: LawyerListing = serde_json::from_value(serde_json::json!({
            "total": 1,
            "available_now": 1,
            "lawyers": [{"id": 7, "name": "Adv. Rajesh Kumar", "available": true}]
        }))
        .unwrap();
        let (mut engine, backend) = engine(
            FakeBackend::new()
                .with_lawyers(Ok(listing))
                .with_connect(Err(FakeFailure::Status(503))),
        );

        engine.process_message(Message::NavigateTo(Page::TeleLaw));
        settle(&mut engine, 1).await;
        engine.process_message(Message::ConnectSelected);
        assert!(engine.state.lawyers.is_connecting(&LawyerId::Number(7)));
        settle(&mut engine, 1).await;

        assert_eq!(engine.state.ui_mode, UiMode::Notice);
        assert_eq!(
            engine.state.notice.as_ref().map(|n| n.message.as_str()),
            Some(CONNECT_FAILED_MESSAGE)
        );
        assert_eq!(engine.state.lawyers.lawyers().len(), 1);
        assert_eq!(
            backend.calls(),
            vec![FakeCall::Lawyers, FakeCall::Connect(LawyerId::Number(7))]
        );
    }

    #[tokio::test]
    async fn test_empty_income_posts_zero() {
        let (mut engine, backend) = engine(FakeBackend::new().with_eligibility(Ok(
            EligibilityVerdict {
                eligible: true,
                reasons: vec!["Income below threshold".into()],
                next_steps: None,
                reference: None,
            },
        )));
        let mut events = engine.subscribe();

        engine.process_message(Message::NavigateTo(Page::LegalAid));
        engine.process_message(Message::SubmitEligibility);
        settle(&mut engine, 1).await;

        assert_eq!(
            backend.calls(),
            vec![FakeCall::CheckEligibility(EligibilityForm::default())]
        );
        assert!(drain_events(&mut events).iter().any(|e| matches!(
            e,
            EngineEvent::EligibilitySettled { result: Ok(v) } if v.eligible
        )));
    }

    #[tokio::test]
    async fn test_shutdown_emits_event() {
        let (mut engine, _) = engine(FakeBackend::new());
        let mut events = engine.subscribe();
        engine.shutdown();
        assert!(matches!(events.try_recv(), Ok(EngineEvent::Shutdown)));
    }
}
