//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use neethi_core::prelude::*;

use crate::message::Message;

/// Signal that ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shutdown {
    Interrupt,
    Terminate,
}

impl Shutdown {
    fn name(&self) -> &'static str {
        match self {
            Shutdown::Interrupt => "SIGINT",
            Shutdown::Terminate => "SIGTERM",
        }
    }
}

/// Listen for a termination signal and turn it into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_shutdown().await {
            Ok(signal) => {
                info!(signal = signal.name(), "Shutdown signal received");
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop gone before shutdown signal was delivered");
                }
            }
            Err(e) => warn!("Signal handler unavailable: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<Shutdown> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM handler: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => Shutdown::Interrupt,
        _ = sigterm.recv() => Shutdown::Terminate,
    })
}

#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<Shutdown> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok(Shutdown::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_message_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        handle.abort();
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(Shutdown::Interrupt.name(), "SIGINT");
        assert_eq!(Shutdown::Terminate.name(), "SIGTERM");
    }
}
