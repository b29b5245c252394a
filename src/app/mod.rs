//! App layer - central state management and command processing
//!
//! The App actor receives UI events, wallet responses and feed-timer ticks,
//! updates state, and emits wallet commands and render state.

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;
