//! Wallet messages - communication between App and Wallet layers

/// Commands sent from App layer to Wallet layer
#[derive(Debug, Clone)]
pub enum WalletCommand {
    /// Run the connect flow against the wallet provider
    Connect { id: u64 },

    /// Shutdown the wallet actor
    Shutdown,
}

/// Responses sent from Wallet layer to App layer
#[derive(Debug, Clone)]
pub enum WalletResponse {
    /// Connect succeeded; the session now holds `address`
    Connected {
        id: u64,
        address: String,
        /// True when a network-switch request was issued and accepted
        network_switched: bool,
        /// Set when the switch request was issued but the provider rejected it;
        /// the session stays connected on the wrong network in that case
        switch_error: Option<String>,
    },
    /// Connect failed; session state is unchanged
    ConnectFailed { id: u64, reason: String },
    /// No wallet provider capability is available; connect was a no-op
    ProviderMissing { id: u64 },
}

impl WalletResponse {
    /// Get the originating command id from the response
    pub fn id(&self) -> u64 {
        match self {
            WalletResponse::Connected { id, .. } => *id,
            WalletResponse::ConnectFailed { id, .. } => *id,
            WalletResponse::ProviderMissing { id } => *id,
        }
    }
}
