//! Wallet provider abstraction
//!
//! Mirrors the EIP-1193 request surface: a single `request` method taking
//! `{method, params}` and returning untyped JSON. The dashboard only ever
//! issues three calls (`eth_requestAccounts`, `eth_chainId`,
//! `wallet_switchEthereumChain`), built by the [`ProviderCall`] constructors.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a wallet provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("request rejected by user: {0}")]
    Rejected(String),

    #[error("provider RPC failed: {0}")]
    Rpc(String),

    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}

/// A single provider request in `{method, params}` form
#[derive(Debug, Clone, Serialize)]
pub struct ProviderCall {
    pub method: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
}

impl ProviderCall {
    /// `eth_requestAccounts` - prompts for account access
    pub fn request_accounts() -> Self {
        ProviderCall {
            method: "eth_requestAccounts",
            params: Vec::new(),
        }
    }

    /// `eth_chainId` - reads the active chain identifier
    pub fn chain_id() -> Self {
        ProviderCall {
            method: "eth_chainId",
            params: Vec::new(),
        }
    }

    /// `wallet_switchEthereumChain` with the given hex chain id
    pub fn switch_chain(chain_id_hex: &str) -> Self {
        ProviderCall {
            method: "wallet_switchEthereumChain",
            params: vec![serde_json::json!({ "chainId": chain_id_hex })],
        }
    }
}

/// External wallet capability (browser extension, hardware bridge, simulator)
///
/// Calls suspend until the wallet-mediated prompt resolves or rejects; there
/// is no timeout and no cancellation.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request(&self, call: ProviderCall) -> Result<Value, ProviderError>;
}
