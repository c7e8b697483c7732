//! Action handlers: UpdateAction dispatch and background request tasks
//!
//! Each action runs as one tokio task that makes a single backend call and
//! reports back through the message channel. Errors are flattened to
//! strings here; the feature state decides what the user sees.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, warn};

use neethi_client::{ClientError, LegalServices};

use crate::handler::UpdateAction;
use crate::message::{Message, RequestResult};

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: LegalServices + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = tokio::select! {
            msg = perform(action, services.as_ref()) => msg,
            _ = shutdown_requested(shutdown_rx) => {
                debug!("Request abandoned on shutdown");
                return;
            }
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before request settled");
        }
    });
}

/// Run the backend call behind an action and build its completion
async fn perform<S: LegalServices>(action: UpdateAction, services: &S) -> Message {
    match action {
        UpdateAction::SendChat { message } => {
            Message::ChatReplied(flatten("chat", services.chat(&message).await))
        }

        UpdateAction::FetchCaseStatus { request_id, cnr } => {
            let result = services
                .case_status(&cnr)
                .await
                .map(|response| response.outcome());
            Message::CaseStatusSettled {
                request_id,
                cnr,
                result: flatten("case-status", result),
            }
        }

        UpdateAction::FetchLawyers => {
            Message::LawyersLoaded(flatten("lawyers", services.lawyers().await))
        }

        UpdateAction::ConnectLawyer { id } => {
            let result = flatten("connect", services.connect(&id).await);
            Message::ConnectSettled { id, result }
        }

        UpdateAction::CheckEligibility { form } => Message::EligibilitySettled(flatten(
            "legal-aid",
            services.check_eligibility(&form).await,
        )),

        UpdateAction::FetchStats => {
            Message::StatsLoaded(flatten("njdg", services.njdg_stats().await))
        }

        UpdateAction::CheckHealth => {
            Message::HealthChecked(flatten("health", services.health().await))
        }
    }
}

fn flatten<T>(endpoint: &str, result: Result<T, ClientError>) -> RequestResult<T> {
    result.map_err(|e| {
        if e.is_network() {
            warn!(endpoint, "Request failed: {}", e);
        } else {
            error!(endpoint, "Unusable backend response: {}", e);
        }
        e.to_string()
    })
}

/// Resolves once shutdown has been signalled; never if the sender is gone
async fn shutdown_requested(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow_and_update() {
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
