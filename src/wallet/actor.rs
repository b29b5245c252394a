//! Wallet actor - runs provider RPC in the Tokio async runtime
//!
//! One connect at a time: wallet prompts are modal on the provider side, so
//! commands are processed sequentially. A never-resolving prompt simply
//! leaves the current command pending.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::messages::{WalletCommand, WalletResponse};
use crate::wallet::provider::WalletProvider;
use crate::wallet::session::{ConnectOutcome, SessionController};

/// Wallet actor that processes connect commands
pub struct WalletActor {
    controller: SessionController,
    response_tx: mpsc::UnboundedSender<WalletResponse>,
}

impl WalletActor {
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        response_tx: mpsc::UnboundedSender<WalletResponse>,
    ) -> Self {
        WalletActor {
            controller: SessionController::new(provider),
            response_tx,
        }
    }

    /// Run the wallet actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<WalletCommand>) {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                WalletCommand::Connect { id } => {
                    tracing::info!(id, "wallet connect requested");
                    let response = match self.controller.connect().await {
                        ConnectOutcome::ProviderMissing => WalletResponse::ProviderMissing { id },
                        ConnectOutcome::Failed { reason } => {
                            WalletResponse::ConnectFailed { id, reason }
                        }
                        ConnectOutcome::Connected {
                            address,
                            network_switched,
                            switch_error,
                        } => WalletResponse::Connected {
                            id,
                            address,
                            network_switched,
                            switch_error,
                        },
                    };
                    tracing::info!(id, "wallet connect completed");
                    let _ = self.response_tx.send(response);
                }
                WalletCommand::Shutdown => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_provider_reports_instead_of_failing() {
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        tokio::spawn(WalletActor::new(None, resp_tx).run(cmd_rx));

        cmd_tx.send(WalletCommand::Connect { id: 7 }).unwrap();
        let response = resp_rx.recv().await.unwrap();
        assert!(matches!(response, WalletResponse::ProviderMissing { id: 7 }));

        cmd_tx.send(WalletCommand::Shutdown).unwrap();
    }
}
