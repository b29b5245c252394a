//! Wallet layer - provider abstraction and the async connect flow
//!
//! The wallet actor is the only place provider RPC runs; the App layer
//! talks to it exclusively through [`crate::messages::WalletCommand`] and
//! [`crate::messages::WalletResponse`].

pub mod actor;
pub mod provider;
pub mod session;
pub mod simulated;

pub use actor::WalletActor;
pub use provider::{ProviderCall, ProviderError, WalletProvider};
pub use session::{ConnectOutcome, SessionController};
pub use simulated::SimulatedProvider;
