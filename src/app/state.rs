//! App state - pure data structure with no I/O logic

use crate::feed::{ActivityFeed, EntropySource, IndexSource};
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{BalanceSummary, BridgeForm, MiningStats, StakingPosition, WalletSession};

/// Main application state - pure data, no I/O
pub struct AppState {
    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    // Wallet session mirror (authoritative state lives in the wallet actor;
    // this copy is what the UI renders)
    pub wallet: WalletSession,
    pub wallet_busy: bool,
    pub wrong_network: bool,
    pub pending_connect_id: Option<u64>,
    pub next_command_id: u64,

    // Status-bar notice
    pub notice: Option<String>,

    // Dashboard cards
    pub balance: BalanceSummary,
    pub mining: MiningStats,
    pub feed: ActivityFeed,
    pub staking: StakingPosition,
    pub bridge: BridgeForm,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_feed_source(Box::new(EntropySource::new()))
    }

    /// Build state with an injected feed randomness source (tests)
    pub fn with_feed_source(source: Box<dyn IndexSource>) -> Self {
        AppState {
            active_panel: Panel::default(),
            input_mode: InputMode::default(),
            cursor_position: 0,
            show_help: false,
            wallet: WalletSession::default(),
            wallet_busy: false,
            wrong_network: false,
            pending_connect_id: None,
            next_command_id: 1,
            notice: None,
            balance: BalanceSummary::default(),
            mining: MiningStats::default(),
            feed: ActivityFeed::new(source),
            staking: StakingPosition::default(),
            bridge: BridgeForm::default(),
        }
    }

    /// Generate a unique command ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_command_id;
        self.next_command_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            show_help: self.show_help,
            wallet: self.wallet.clone(),
            wallet_busy: self.wallet_busy,
            wrong_network: self.wrong_network,
            notice: self.notice.clone(),
            balance: self.balance.clone(),
            mining: self.mining.clone(),
            activities: self.feed.snapshot(),
            staking: self.staking.clone(),
            bridge_direction: self.bridge.direction,
            bridge_amount: self.bridge.amount_input.clone(),
            bridge_quote: self.bridge.quote(),
        }
    }
}
