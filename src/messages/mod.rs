//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Wallet layers.

pub mod render;
pub mod ui_events;
pub mod wallet;

pub use render::RenderState;
pub use ui_events::UiEvent;
pub use wallet::{WalletCommand, WalletResponse};
