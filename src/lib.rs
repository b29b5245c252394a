//! # xmrt-dash
//!
//! A terminal dashboard for the MobileMonero "AI-Powered Mining DAO" mockup.
//!
//! ## Features
//! - Balance, mining-revenue and staking cards with the mockup figures
//! - Rotating synthetic AI-agent activity feed (10-second timer)
//! - Wallet connect against an abstract provider, with Sepolia network switch
//! - Token-bridge preview with a fixed rate (no assets ever move)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine + feed timer)
//! - Wallet Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod feed;
pub mod messages;
pub mod models;
pub mod ui;
pub mod wallet;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use feed::{ActivityFeed, EntropySource, IndexSource};
pub use messages::{RenderState, UiEvent, WalletCommand, WalletResponse};
pub use models::{ActivityEntry, Agent, WalletSession};
pub use wallet::{ProviderCall, ProviderError, SimulatedProvider, WalletActor, WalletProvider};
