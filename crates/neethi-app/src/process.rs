//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches every resulting action.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use neethi_client::LegalServices;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Arc<S>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    S: LegalServices + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            tracing::debug!(?action, "Dispatching action");
            handle_action(action, msg_tx.clone(), services.clone(), shutdown_rx.clone());
        }

        msg = result.message;
    }
}
