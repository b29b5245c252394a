//! Wallet session controller - the connect flow
//!
//! Owns the [`WalletSession`] and runs the connect sequence against an
//! optional provider: request accounts, record the first one, then read the
//! active chain and issue a single switch request when it is not Sepolia.
//! Every failure is caught and reported as a [`ConnectOutcome`]; nothing
//! here panics or returns `Err` to the caller.

use std::sync::Arc;

use serde_json::Value;

use crate::constants::{TARGET_CHAIN_ID, TARGET_CHAIN_ID_HEX};
use crate::models::WalletSession;
use crate::wallet::provider::{ProviderCall, ProviderError, WalletProvider};

/// Result of one connect attempt
#[derive(Debug, Clone)]
pub enum ConnectOutcome {
    /// No provider capability in this environment; session untouched
    ProviderMissing,
    /// Provider RPC failed or returned no accounts; session untouched
    Failed { reason: String },
    /// Session is connected; `switch_error` is set when the wallet stayed
    /// on the wrong network because the switch request was rejected
    Connected {
        address: String,
        network_switched: bool,
        switch_error: Option<String>,
    },
}

/// Connect-flow controller holding the session state
pub struct SessionController {
    provider: Option<Arc<dyn WalletProvider>>,
    session: WalletSession,
}

impl SessionController {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        SessionController {
            provider,
            session: WalletSession::default(),
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Run the connect flow; see module docs for the sequence
    pub async fn connect(&mut self) -> ConnectOutcome {
        let Some(provider) = self.provider.clone() else {
            tracing::warn!("no wallet provider available, connect is a no-op");
            return ConnectOutcome::ProviderMissing;
        };

        let accounts = match provider.request(ProviderCall::request_accounts()).await {
            Ok(value) => match parse_accounts(&value) {
                Ok(accounts) => accounts,
                Err(e) => {
                    tracing::warn!(error = %e, "account request returned malformed data");
                    return ConnectOutcome::Failed { reason: e.to_string() };
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "error connecting wallet");
                return ConnectOutcome::Failed { reason: e.to_string() };
            }
        };

        let Some(address) = accounts.into_iter().next() else {
            tracing::warn!("provider returned an empty account list");
            return ConnectOutcome::Failed {
                reason: "provider returned no accounts".to_string(),
            };
        };

        self.session.mark_connected(address.clone());
        tracing::info!(address = %address, "wallet connected");

        // Chain check: one switch request at most, failure leaves the
        // session connected on the wrong network.
        let (network_switched, switch_error) = match self.active_chain_id(&provider).await {
            Ok(chain_id) if chain_id == TARGET_CHAIN_ID => (false, None),
            Ok(chain_id) => {
                tracing::info!(chain_id, "wallet on wrong network, requesting switch");
                match provider
                    .request(ProviderCall::switch_chain(TARGET_CHAIN_ID_HEX))
                    .await
                {
                    Ok(_) => (true, None),
                    Err(e) => {
                        tracing::warn!(error = %e, "error switching network");
                        (false, Some(e.to_string()))
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read active chain id");
                (false, Some(e.to_string()))
            }
        };

        ConnectOutcome::Connected {
            address,
            network_switched,
            switch_error,
        }
    }

    async fn active_chain_id(
        &self,
        provider: &Arc<dyn WalletProvider>,
    ) -> Result<u64, ProviderError> {
        let value = provider.request(ProviderCall::chain_id()).await?;
        parse_chain_id(&value)
    }
}

fn parse_accounts(value: &Value) -> Result<Vec<String>, ProviderError> {
    let list = value.as_array().ok_or_else(|| {
        ProviderError::InvalidResponse(format!("expected account array, got {value}"))
    })?;

    list.iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ProviderError::InvalidResponse(format!("non-string account {entry}")))
        })
        .collect()
}

/// Parses an integer-like chain id: hex string, decimal string, or number
fn parse_chain_id(value: &Value) -> Result<u64, ProviderError> {
    match value {
        Value::String(s) => {
            let parsed = if let Some(hex) = s.strip_prefix("0x") {
                u64::from_str_radix(hex, 16).ok()
            } else {
                s.parse::<u64>().ok()
            };
            parsed.ok_or_else(|| ProviderError::InvalidResponse(format!("bad chain id {s:?}")))
        }
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| ProviderError::InvalidResponse(format!("bad chain id {n}"))),
        other => Err(ProviderError::InvalidResponse(format!(
            "bad chain id {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock provider recording every call it receives
    struct MockProvider {
        accounts: Result<Vec<String>, ProviderError>,
        chain_id: u64,
        switch_result: Result<(), ProviderError>,
        calls: Mutex<Vec<ProviderCall>>,
    }

    impl MockProvider {
        fn on_chain(chain_id: u64) -> Self {
            MockProvider {
                accounts: Ok(vec!["0xfeed".to_string(), "0xbeef".to_string()]),
                chain_id,
                switch_result: Ok(()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls_named(&self, method: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.method == method)
                .count()
        }
    }

    #[async_trait::async_trait]
    impl WalletProvider for MockProvider {
        async fn request(&self, call: ProviderCall) -> Result<Value, ProviderError> {
            let method = call.method;
            self.calls.lock().unwrap().push(call);
            match method {
                "eth_requestAccounts" => self.accounts.clone().map(|a| serde_json::json!(a)),
                "eth_chainId" => Ok(Value::String(format!("{:#x}", self.chain_id))),
                "wallet_switchEthereumChain" => {
                    self.switch_result.clone().map(|_| Value::Null)
                }
                other => Err(ProviderError::Rpc(format!("unexpected method {other}"))),
            }
        }
    }

    #[tokio::test]
    async fn test_connect_records_first_account() {
        let provider = Arc::new(MockProvider::on_chain(TARGET_CHAIN_ID));
        let mut controller = SessionController::new(Some(provider.clone()));

        let outcome = controller.connect().await;
        assert!(matches!(
            outcome,
            ConnectOutcome::Connected { ref address, network_switched: false, switch_error: None }
                if address == "0xfeed"
        ));
        assert!(controller.session().connected);
        assert_eq!(controller.session().address.as_deref(), Some("0xfeed"));
        assert_eq!(provider.calls_named("wallet_switchEthereumChain"), 0);
    }

    #[tokio::test]
    async fn test_wrong_network_triggers_one_switch_per_connect() {
        let provider = Arc::new(MockProvider::on_chain(1));
        let mut controller = SessionController::new(Some(provider.clone()));

        controller.connect().await;
        assert_eq!(provider.calls_named("wallet_switchEthereumChain"), 1);

        // Mock stays on chain 1, so a second connect must issue exactly one more.
        controller.connect().await;
        assert_eq!(provider.calls_named("wallet_switchEthereumChain"), 2);

        let calls = provider.calls.lock().unwrap();
        let switch = calls
            .iter()
            .find(|c| c.method == "wallet_switchEthereumChain")
            .unwrap();
        assert_eq!(switch.params[0]["chainId"], "0xaa36a7");
    }

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let provider = Arc::new(MockProvider::on_chain(TARGET_CHAIN_ID));
        let mut controller = SessionController::new(Some(provider));

        controller.connect().await;
        let first = controller.session().clone();
        controller.connect().await;
        assert_eq!(controller.session(), &first);
    }

    #[tokio::test]
    async fn test_missing_provider_is_a_noop() {
        let mut controller = SessionController::new(None);
        let outcome = controller.connect().await;
        assert!(matches!(outcome, ConnectOutcome::ProviderMissing));
        assert!(!controller.session().connected);
        assert!(controller.session().address.is_none());
    }

    #[tokio::test]
    async fn test_rejected_prompt_leaves_session_unchanged() {
        let provider = MockProvider {
            accounts: Err(ProviderError::Rejected("user denied access".to_string())),
            chain_id: TARGET_CHAIN_ID,
            switch_result: Ok(()),
            calls: Mutex::new(Vec::new()),
        };
        let mut controller = SessionController::new(Some(Arc::new(provider)));

        let outcome = controller.connect().await;
        assert!(matches!(outcome, ConnectOutcome::Failed { .. }));
        assert!(!controller.session().connected);
    }

    #[tokio::test]
    async fn test_switch_failure_keeps_session_connected() {
        let provider = MockProvider {
            accounts: Ok(vec!["0xfeed".to_string()]),
            chain_id: 1,
            switch_result: Err(ProviderError::Rpc("switch refused".to_string())),
            calls: Mutex::new(Vec::new()),
        };
        let mut controller = SessionController::new(Some(Arc::new(provider)));

        let outcome = controller.connect().await;
        assert!(matches!(
            outcome,
            ConnectOutcome::Connected { switch_error: Some(_), network_switched: false, .. }
        ));
        assert!(controller.session().connected);
    }

    #[tokio::test]
    async fn test_empty_account_list_fails() {
        let provider = MockProvider {
            accounts: Ok(Vec::new()),
            chain_id: TARGET_CHAIN_ID,
            switch_result: Ok(()),
            calls: Mutex::new(Vec::new()),
        };
        let mut controller = SessionController::new(Some(Arc::new(provider)));

        let outcome = controller.connect().await;
        assert!(matches!(outcome, ConnectOutcome::Failed { .. }));
        assert!(!controller.session().connected);
    }

    #[test]
    fn test_parse_chain_id_forms() {
        assert_eq!(parse_chain_id(&serde_json::json!("0xaa36a7")).unwrap(), 11_155_111);
        assert_eq!(parse_chain_id(&serde_json::json!("11155111")).unwrap(), 11_155_111);
        assert_eq!(parse_chain_id(&serde_json::json!(11155111u64)).unwrap(), 11_155_111);
        assert!(parse_chain_id(&serde_json::json!(null)).is_err());
        assert!(parse_chain_id(&serde_json::json!("0xzz")).is_err());
    }
}
