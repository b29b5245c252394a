//! Simulated wallet provider
//!
//! The dashboard is a mockup with no real chain interaction, so the binary
//! ships with an in-memory provider: one fixed dev account, starts on
//! mainnet so the connect flow exercises the network-switch path, and
//! honors switch requests by updating its recorded chain id.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::wallet::provider::{ProviderCall, ProviderError, WalletProvider};

const DEV_ACCOUNT: &str = "0x9c41bdc1e3df6ae1e6a8f7f03a7d1c7b8d2f4e60";

pub struct SimulatedProvider {
    chain_id: Mutex<u64>,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        SimulatedProvider {
            chain_id: Mutex::new(1),
        }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletProvider for SimulatedProvider {
    async fn request(&self, call: ProviderCall) -> Result<Value, ProviderError> {
        // Stand-in for the wallet prompt round-trip
        tokio::time::sleep(Duration::from_millis(200)).await;

        tracing::debug!(method = call.method, "simulated provider request");

        match call.method {
            "eth_requestAccounts" => Ok(serde_json::json!([DEV_ACCOUNT])),
            "eth_chainId" => {
                let chain_id = *self.chain_id.lock().unwrap();
                Ok(Value::String(format!("{chain_id:#x}")))
            }
            "wallet_switchEthereumChain" => {
                let requested = call
                    .params
                    .first()
                    .and_then(|p| p.get("chainId"))
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ProviderError::InvalidResponse("missing chainId param".to_string())
                    })?;
                let parsed = requested
                    .strip_prefix("0x")
                    .and_then(|hex| u64::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| {
                        ProviderError::InvalidResponse(format!("bad chainId {requested:?}"))
                    })?;
                *self.chain_id.lock().unwrap() = parsed;
                Ok(Value::Null)
            }
            other => Err(ProviderError::Rpc(format!("unsupported method {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TARGET_CHAIN_ID, TARGET_CHAIN_ID_HEX};

    #[tokio::test]
    async fn test_switch_updates_reported_chain() {
        let provider = SimulatedProvider::new();

        let before = provider.request(ProviderCall::chain_id()).await.unwrap();
        assert_eq!(before, Value::String("0x1".to_string()));

        provider
            .request(ProviderCall::switch_chain(TARGET_CHAIN_ID_HEX))
            .await
            .unwrap();

        let after = provider.request(ProviderCall::chain_id()).await.unwrap();
        assert_eq!(after, Value::String(format!("{TARGET_CHAIN_ID:#x}")));
    }

    #[tokio::test]
    async fn test_accounts_are_nonempty() {
        let provider = SimulatedProvider::new();
        let accounts = provider
            .request(ProviderCall::request_accounts())
            .await
            .unwrap();
        assert_eq!(accounts.as_array().unwrap().len(), 1);
    }
}
