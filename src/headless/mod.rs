//! Headless mode - NDJSON event output instead of the TUI
//!
//! Stdin lines are commands (see [`commands`]); every state change the
//! engine reports is written to stdout as one JSON object per line. Each
//! object has an `"event"` field naming its type and a millisecond
//! `"timestamp"`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"stats","headline":"4.5 Cr","demo_notice":"This data is for demonstration. ...","timestamp":1704700001000}
//! {"event":"chat_turn","sender":"user","text":"What is Tele-Law?","timestamp":1704700002000}
//! {"event":"chat_turn","sender":"bot","text":"Tele-Law connects ...","sources":["https://tele-law.in"],"ai_generated":false,"timestamp":1704700003000}
//! ```

pub mod commands;
pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use neethi_app::{EngineEvent, FeatureError};
use neethi_core::njdg::headline_pending;
use neethi_core::prelude::*;
use neethi_core::{CaseOutcome, CaseRecord, EligibilityVerdict, Lawyer, NjdgStats, Sender};

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A turn was appended to the conversation
    ChatTurn {
        sender: Sender,
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        sources: Vec<String>,
        ai_generated: bool,
        timestamp: i64,
    },

    /// A case lookup settled with an answer from the backend
    CaseStatus {
        cnr: String,
        found: bool,
        is_demo: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        record: Option<CaseRecord>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        timestamp: i64,
    },

    /// The lawyer directory loaded
    Lawyers {
        total: u32,
        available_now: u32,
        lawyers: Vec<Lawyer>,
        timestamp: i64,
    },

    /// A connect request settled
    Connect { message: String, timestamp: i64 },

    /// An eligibility check settled
    Eligibility {
        headline: String,
        #[serde(flatten)]
        verdict: EligibilityVerdict,
        timestamp: i64,
    },

    /// Judicial statistics loaded
    Stats {
        headline: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        demo_notice: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<NjdgStats>,
        timestamp: i64,
    },

    /// Backend health indicator changed
    Backend { status: String, timestamp: i64 },

    /// A feature failed, or a command could not be understood
    Error {
        source: String,
        message: String,
        validation: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(source: &str, error: &FeatureError) -> Self {
        Self::Error {
            source: source.to_string(),
            message: error.message().to_string(),
            validation: error.is_validation(),
            timestamp: Self::now(),
        }
    }

    pub fn command_error(message: impl Into<String>) -> Self {
        Self::Error {
            source: "command".to_string(),
            message: message.into(),
            validation: true,
            timestamp: Self::now(),
        }
    }

    pub fn lawyers(listing: &neethi_core::LawyerListing) -> Self {
        Self::Lawyers {
            total: listing.total,
            available_now: listing.available_now,
            lawyers: listing.lawyers.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn stats(response: &neethi_core::NjdgResponse) -> Self {
        Self::Stats {
            headline: headline_pending(response.data.as_ref()),
            demo_notice: response.demo_notice().map(str::to_string),
            data: response.data.clone(),
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event; page changes and shutdown have no output
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let converted = match event {
            EngineEvent::ChatTurnAdded { turn } => Self::ChatTurn {
                sender: turn.sender,
                text: turn.text.clone(),
                sources: turn.sources.clone(),
                ai_generated: turn.ai_generated,
                timestamp,
            },
            EngineEvent::CaseStatusSettled { cnr, result } => match result {
                Err(e) => Self::error("case_status", e),
                Ok(outcome) => {
                    let (found, is_demo, record, message) = match outcome {
                        CaseOutcome::Found { record, is_demo } => {
                            (true, *is_demo, Some(record.clone()), None)
                        }
                        CaseOutcome::NotFound { message } => {
                            (false, false, None, Some(message.clone()))
                        }
                        CaseOutcome::Error { message } => {
                            return Some(Self::Error {
                                source: "case_status".to_string(),
                                message: message.clone(),
                                validation: false,
                                timestamp,
                            })
                        }
                    };
                    Self::CaseStatus {
                        cnr: cnr.clone(),
                        found,
                        is_demo,
                        record,
                        message,
                        timestamp,
                    }
                }
            },
            EngineEvent::EligibilitySettled { result } => match result {
                Ok(verdict) => Self::Eligibility {
                    headline: verdict.headline().to_string(),
                    verdict: verdict.clone(),
                    timestamp,
                },
                Err(e) => Self::error("eligibility", e),
            },
            EngineEvent::LawyersSettled { result } => match result {
                Ok(listing) => Self::lawyers(listing),
                Err(e) => Self::error("lawyers", e),
            },
            EngineEvent::StatsSettled { result } => match result {
                Ok(response) => Self::stats(response),
                Err(e) => Self::error("stats", e),
            },
            EngineEvent::NoticeShown { notice } => Self::Connect {
                message: notice.message.clone(),
                timestamp,
            },
            EngineEvent::BackendStatusChanged { status } => Self::Backend {
                status: status.label().to_string(),
                timestamp,
            },
            EngineEvent::PageChanged { .. } | EngineEvent::Shutdown => return None,
        };
        Some(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neethi_app::Notice;
    use neethi_core::case_status::DEMO_CNR;
    use neethi_core::{BackendStatus, ChatTurn};

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out).expect("write succeeds");
        let line = String::from_utf8(out).expect("utf-8");
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1, "one line per event");
        serde_json::from_str(line.trim_end()).expect("valid JSON")
    }

    #[test]
    fn test_chat_turn_serialization() {
        let mut turn = ChatTurn::bot("Tele-Law connects citizens to lawyers.");
        turn.sources = vec!["https://tele-law.in".into()];
        let event = HeadlessEvent::from_engine_event(&EngineEvent::ChatTurnAdded { turn })
            .expect("chat turns are emitted");
        let value = to_json(&event);

        assert_eq!(value["event"], "chat_turn");
        assert_eq!(value["sender"], "bot");
        assert_eq!(value["sources"][0], "https://tele-law.in");
        assert!(value["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_user_turn_omits_empty_sources() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::ChatTurnAdded {
            turn: ChatTurn::user("hello"),
        })
        .unwrap();
        let value = to_json(&event);
        assert_eq!(value["sender"], "user");
        assert!(value.get("sources").is_none());
    }

    #[test]
    fn test_demo_case_status() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::CaseStatusSettled {
            cnr: DEMO_CNR.into(),
            result: Ok(CaseOutcome::Found {
                record: CaseRecord {
                    cnr: DEMO_CNR.into(),
                    ..Default::default()
                },
                is_demo: true,
            }),
        })
        .unwrap();
        let value = to_json(&event);

        assert_eq!(value["event"], "case_status");
        assert_eq!(value["found"], true);
        assert_eq!(value["is_demo"], true);
        assert_eq!(value["record"]["cnr"], DEMO_CNR);
    }

    #[test]
    fn test_validation_failure_is_error_event() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::CaseStatusSettled {
            cnr: "DLCT01".into(),
            result: Err(FeatureError::Validation(
                "Please enter a valid 16-character CNR number.".into(),
            )),
        })
        .unwrap();
        let value = to_json(&event);

        assert_eq!(value["event"], "error");
        assert_eq!(value["source"], "case_status");
        assert_eq!(value["validation"], true);
    }

    #[test]
    fn test_eligibility_fields_are_flattened() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::EligibilitySettled {
            result: Ok(EligibilityVerdict {
                eligible: true,
                reasons: vec!["Income below threshold".into()],
                next_steps: None,
                reference: None,
            }),
        })
        .unwrap();
        let value = to_json(&event);

        assert_eq!(value["event"], "eligibility");
        assert_eq!(value["eligible"], true);
        assert_eq!(value["reasons"][0], "Income below threshold");
        assert_eq!(value["headline"], "✅ You are Eligible for Free Legal Aid!");
    }

    #[test]
    fn test_notice_becomes_connect_event() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::NoticeShown {
            notice: Notice::new("Tele-Law", "Connection failed. Please try again."),
        })
        .unwrap();
        let value = to_json(&event);
        assert_eq!(value["event"], "connect");
        assert_eq!(value["message"], "Connection failed. Please try again.");
    }

    #[test]
    fn test_backend_status_label() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::BackendStatusChanged {
            status: BackendStatus::Offline,
        })
        .unwrap();
        assert_eq!(to_json(&event)["status"], "Offline");
    }

    #[test]
    fn test_silent_events() {
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::Shutdown).is_none());
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::PageChanged {
            page: neethi_app::Page::Njdg
        })
        .is_none());
    }
}
