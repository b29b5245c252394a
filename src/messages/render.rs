//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{
    ActivityEntry, BalanceSummary, BridgeDirection, MiningStats, StakingPosition, WalletSession,
};

/// Complete state needed by the UI to render
#[derive(Clone, Debug)]
pub struct RenderState {
    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    // Wallet
    pub wallet: WalletSession,
    pub wallet_busy: bool,
    pub wrong_network: bool,

    // One-line notice shown in the status bar (connect results, preview actions)
    pub notice: Option<String>,

    // Dashboard cards
    pub balance: BalanceSummary,
    pub mining: MiningStats,
    pub activities: Vec<ActivityEntry>,
    pub staking: StakingPosition,

    // Bridge widget
    pub bridge_direction: BridgeDirection,
    pub bridge_amount: String,
    pub bridge_quote: Option<f64>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            active_panel: Panel::default(),
            input_mode: InputMode::default(),
            cursor_position: 0,
            show_help: false,
            wallet: WalletSession::default(),
            wallet_busy: false,
            wrong_network: false,
            notice: None,
            balance: BalanceSummary::default(),
            mining: MiningStats::default(),
            activities: crate::models::seed_activities(),
            staking: StakingPosition::default(),
            bridge_direction: BridgeDirection::default(),
            bridge_amount: String::new(),
            bridge_quote: None,
        }
    }
}
