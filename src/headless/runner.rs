//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin and writes one NDJSON event per engine state
//! change to stdout. When stdin closes the runner waits for in-flight
//! requests to settle, then exits.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::mpsc;

use neethi_app::config::Settings;
use neethi_app::{AppState, Engine, EngineEvent, Message};
use neethi_client::{HttpLegalServices, LegalServices};
use neethi_core::prelude::*;

use super::{commands, HeadlessEvent};

/// Capacity of the stdin line channel
const LINE_CHANNEL_CAPACITY: usize = 64;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings, api_base: &str) -> Result<()> {
    info!(api_base, "Neethi starting in headless mode");

    let services = HttpLegalServices::new(api_base)
        .map_err(|e| Error::config(format!("Invalid backend address: {}", e)))?;

    let mut state = AppState::with_settings(settings);
    state.api_base = api_base.to_string();

    let mut engine = Engine::new(state, Arc::new(services));

    let (line_tx, line_rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);
    std::thread::spawn(move || read_stdin_lines(line_tx));

    // Subscribe before start() so the startup fetches are reported
    let events = engine.subscribe();
    engine.start();

    let mut stdout = std::io::stdout();
    let result = event_loop(&mut engine, events, line_rx, &mut stdout).await;

    engine.shutdown();
    info!("Neethi headless mode exiting");
    result
}

/// Forward stdin lines until EOF; runs on its own thread
fn read_stdin_lines(line_tx: mpsc::Sender<String>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    debug!("Headless loop gone, stopping stdin reader");
                    return;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                return;
            }
        }
    }
    debug!("Stdin closed");
}

/// Drive the engine from stdin lines and request completions
async fn event_loop<S, W>(
    engine: &mut Engine<S>,
    mut events: broadcast::Receiver<EngineEvent>,
    mut lines: mpsc::Receiver<String>,
    out: &mut W,
) -> Result<()>
where
    S: LegalServices + Send + Sync + 'static,
    W: Write,
{
    let mut input_open = true;

    loop {
        write_engine_events(&mut events, out)?;

        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if !input_open && !engine.state.has_pending_requests() {
            info!("Input closed and no requests in flight");
            break;
        }

        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => dispatch(engine, msg, out)?,
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            line = lines.recv(), if input_open => match line {
                Some(line) => match commands::parse(&line) {
                    Ok(messages) => {
                        for msg in messages {
                            dispatch(engine, msg, out)?;
                        }
                    }
                    Err(e) if !e.is_fatal() => {
                        HeadlessEvent::command_error(e.to_string()).write_to(out)?
                    }
                    Err(e) => return Err(e),
                },
                None => input_open = false,
            },
        }
    }

    write_engine_events(&mut events, out)?;
    Ok(())
}

/// Process one message
///
/// Lawyers and statistics are fetched once per session; asking again
/// reports the result already held.
fn dispatch<S, W>(engine: &mut Engine<S>, msg: Message, out: &mut W) -> Result<()>
where
    S: LegalServices + Send + Sync + 'static,
    W: Write,
{
    let replay = match &msg {
        Message::LoadLawyers => engine
            .state
            .lawyers
            .listing
            .settled()
            .map(|result| match result {
                Ok(listing) => HeadlessEvent::lawyers(&listing),
                Err(e) => HeadlessEvent::error("lawyers", &e),
            }),
        Message::LoadStats => engine.state.stats.stats.settled().map(|result| match result {
            Ok(response) => HeadlessEvent::stats(&response),
            Err(e) => HeadlessEvent::error("stats", &e),
        }),
        _ => None,
    };

    engine.process_message(msg);

    if let Some(event) = replay {
        event.write_to(out)?;
    }
    Ok(())
}

fn write_engine_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => match HeadlessEvent::from_engine_event(&event) {
                Some(headless) => headless.write_to(out)?,
                None => debug!(event = event.name(), "No headless output for engine event"),
            },
            Err(TryRecvError::Lagged(skipped)) => {
                warn!(skipped, "Headless output fell behind; events dropped");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use neethi_client::test_utils::{FakeBackend, FakeCall};
    use neethi_core::{ChatReply, LawyerListing, NjdgResponse};

    /// Feed `input` lines to a fresh engine and collect the emitted events
    async fn run_with(
        state: AppState,
        backend: FakeBackend,
        input: &[&str],
    ) -> (Vec<serde_json::Value>, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        let mut engine = Engine::new(state, backend.clone());
        let events = engine.subscribe();
        engine.start();

        let (line_tx, line_rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);
        for line in input {
            line_tx.send(line.to_string()).await.unwrap();
        }
        drop(line_tx);

        let mut out = Vec::new();
        tokio::time::timeout(
            Duration::from_secs(5),
            event_loop(&mut engine, events, line_rx, &mut out),
        )
        .await
        .expect("headless loop finishes")
        .expect("headless loop succeeds");
        engine.shutdown();

        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).expect("every line is JSON"))
            .collect();
        (lines, backend)
    }

    async fn run(backend: FakeBackend, input: &[&str]) -> (Vec<serde_json::Value>, Arc<FakeBackend>) {
        run_with(AppState::new(), backend, input).await
    }

    fn events_named<'a>(
        events: &'a [serde_json::Value],
        name: &str,
    ) -> Vec<&'a serde_json::Value> {
        events.iter().filter(|e| e["event"] == name).collect()
    }

    fn demo_stats() -> NjdgResponse {
        serde_json::from_str(r#"{"data":{"total_pending_cases":45000000},"source":"demo"}"#)
            .unwrap()
    }

    #[tokio::test]
    async fn test_startup_reports_stats() {
        let (events, _) = run(FakeBackend::new().with_njdg(Ok(demo_stats())), &[]).await;

        let stats = events_named(&events, "stats");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0]["headline"], "4.5 Cr");
        assert!(stats[0]["demo_notice"].is_string());
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let backend = FakeBackend::new().with_chat(Ok(ChatReply {
            response: "Tele-Law connects citizens to panel lawyers.".into(),
            sources: Some(vec!["https://tele-law.in".into()]),
            intent: None,
            ai_generated: Some(true),
        }));
        let (events, backend) = run(backend, &["What is Tele-Law?"]).await;

        let turns = events_named(&events, "chat_turn");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0]["sender"], "user");
        assert_eq!(turns[0]["text"], "What is Tele-Law?");
        assert_eq!(turns[1]["sender"], "bot");
        assert_eq!(turns[1]["ai_generated"], true);
        assert!(backend
            .calls()
            .contains(&FakeCall::Chat("What is Tele-Law?".into())));
    }

    #[tokio::test]
    async fn test_invalid_cnr_reports_validation_error() {
        let (events, backend) = run(FakeBackend::new(), &["/case DLCT01"]).await;

        let errors: Vec<_> = events_named(&events, "error")
            .into_iter()
            .filter(|e| e["source"] == "case_status")
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["validation"], true);
        assert!(!backend
            .calls()
            .iter()
            .any(|c| matches!(c, FakeCall::CaseStatus(_))));
    }

    #[tokio::test]
    async fn test_bad_command_reports_error_and_continues() {
        let backend = FakeBackend::new().with_lawyers(Ok(LawyerListing::default()));
        let (events, _) = run(backend, &["/bogus", "/lawyers"]).await;

        let errors = events_named(&events, "error");
        assert!(errors.iter().any(|e| e["source"] == "command"));
        assert_eq!(events_named(&events, "lawyers").len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_load_replays_held_result() {
        let mut state = AppState::new();
        state.stats.begin_load();
        state.stats.complete_load::<()>(Ok(demo_stats()));

        let (events, backend) = run_with(state, FakeBackend::new(), &["/stats"]).await;

        let stats = events_named(&events, "stats");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0]["headline"], "4.5 Cr");
        assert!(!backend.calls().contains(&FakeCall::NjdgStats));
    }

    #[tokio::test]
    async fn test_every_connect_reports_before_exit() {
        let backend = FakeBackend::new().with_connect(Ok(neethi_core::ConnectReply {
            message: "You are in the queue".into(),
            ..Default::default()
        }));
        let (events, backend) = run(backend, &["/connect 7", "/connect LAW002"]).await;

        assert_eq!(events_named(&events, "connect").len(), 2);
        let connects = backend
            .calls()
            .into_iter()
            .filter(|c| matches!(c, FakeCall::Connect(_)))
            .count();
        assert_eq!(connects, 2);
    }

    #[tokio::test]
    async fn test_rejected_case_search_reports_short_cnr() {
        let (events, _) = run(
            FakeBackend::new(),
            &["/case DLCT010012345672024", "/case SHORT"],
        )
        .await;

        let last = events
            .iter()
            .rev()
            .find(|e| e["source"] == "case_status" || e["event"] == "case_status")
            .expect("case lookup reported");
        assert_eq!(last["event"], "error");
        assert_eq!(last["validation"], true);
    }

    #[tokio::test]
    async fn test_quit_command_stops_loop() {
        let (events, backend) = run(FakeBackend::new(), &["/quit", "/lawyers"]).await;

        assert!(events_named(&events, "lawyers").is_empty());
        assert!(!backend.calls().contains(&FakeCall::Lawyers));
    }
}
