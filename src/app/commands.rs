//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::STAKE_STEP_XMRT;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{WalletCommand, WalletResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Bridge amount editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel == Panel::Bridge {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.bridge.amount_input.len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        // Amount field only takes digits and one decimal point
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        if c == '.' && self.bridge.amount_input.contains('.') {
            return;
        }
        if self.cursor_position <= self.bridge.amount_input.len() {
            self.bridge.amount_input.insert(self.cursor_position, c);
            self.cursor_position += 1;
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.bridge.amount_input.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.bridge.amount_input.len() {
            self.cursor_position += 1;
        }
    }

    // ========================
    // Bridge preview actions
    // ========================

    pub fn flip_bridge(&mut self) {
        self.bridge.direction = self.bridge.direction.flip();
    }

    pub fn submit_bridge(&mut self) {
        self.notice = Some(match self.bridge.quote() {
            Some(quote) => format!(
                "Bridge preview only: {} {} would arrive as {:.4} {} (no assets moved)",
                self.bridge.amount_input,
                self.bridge.direction.from_symbol(),
                quote,
                self.bridge.direction.to_symbol(),
            ),
            None => "Enter a bridge amount first".to_string(),
        });
    }

    // ========================
    // Staking preview actions
    // ========================

    pub fn stake_more(&mut self) {
        self.staking.staked_xmrt += STAKE_STEP_XMRT;
        self.notice = Some(format!(
            "Staking preview only: position now {:.0} XMRT",
            self.staking.staked_xmrt
        ));
    }

    pub fn unstake(&mut self) {
        if self.staking.staked_xmrt < STAKE_STEP_XMRT {
            self.notice = Some("Nothing left to unstake".to_string());
            return;
        }
        self.staking.staked_xmrt -= STAKE_STEP_XMRT;
        self.notice = Some(format!(
            "Staking preview only: position now {:.0} XMRT",
            self.staking.staked_xmrt
        ));
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Wallet connect
    // ========================

    pub fn prepare_connect(&mut self) -> Option<WalletCommand> {
        if self.wallet_busy {
            return None;
        }

        self.wallet_busy = true;
        self.notice = Some("Requesting wallet connection...".to_string());

        let id = self.next_id();
        self.pending_connect_id = Some(id);

        Some(WalletCommand::Connect { id })
    }

    pub fn handle_wallet_response(&mut self, response: WalletResponse) {
        // Only process responses for the pending connect
        if self.pending_connect_id != Some(response.id()) {
            return;
        }
        self.pending_connect_id = None;
        self.wallet_busy = false;

        match response {
            WalletResponse::Connected {
                address,
                network_switched,
                switch_error,
                ..
            } => {
                self.wallet.mark_connected(address);
                self.wrong_network = switch_error.is_some();
                self.notice = Some(match switch_error {
                    Some(e) => format!("Connected, but network switch failed: {e}"),
                    None if network_switched => {
                        "Wallet connected (switched to Sepolia)".to_string()
                    }
                    None => "Wallet connected".to_string(),
                });
            }
            WalletResponse::ConnectFailed { reason, .. } => {
                self.notice = Some(format!("Wallet connection failed: {reason}"));
            }
            WalletResponse::ProviderMissing { .. } => {
                self.notice = Some("No wallet provider detected".to_string());
            }
        }
    }

    // ========================
    // Activity feed
    // ========================

    pub fn feed_tick(&mut self) {
        self.feed.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Agent;

    #[test]
    fn test_initial_state_matches_mockup() {
        let state = AppState::new();
        assert!(!state.wallet.connected);
        assert!(state.wallet.address.is_none());

        let feed = state.feed.entries();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].agent, Agent::Executive);
        assert_eq!(feed[1].agent, Agent::Operations);
        assert_eq!(feed[2].agent, Agent::Financial);
    }

    #[test]
    fn test_connect_response_updates_session() {
        let mut state = AppState::new();
        let cmd = state.prepare_connect().unwrap();
        let WalletCommand::Connect { id } = cmd else {
            panic!("expected connect command");
        };
        assert!(state.wallet_busy);

        state.handle_wallet_response(WalletResponse::Connected {
            id,
            address: "0xfeed".to_string(),
            network_switched: true,
            switch_error: None,
        });
        assert!(state.wallet.connected);
        assert_eq!(state.wallet.address.as_deref(), Some("0xfeed"));
        assert!(!state.wallet_busy);
        assert!(!state.wrong_network);
    }

    #[test]
    fn test_connect_is_single_flight() {
        let mut state = AppState::new();
        assert!(state.prepare_connect().is_some());
        assert!(state.prepare_connect().is_none());
    }

    #[test]
    fn test_stale_wallet_response_ignored() {
        let mut state = AppState::new();
        state.handle_wallet_response(WalletResponse::Connected {
            id: 99,
            address: "0xdead".to_string(),
            network_switched: false,
            switch_error: None,
        });
        assert!(!state.wallet.connected);
    }

    #[test]
    fn test_switch_failure_flags_wrong_network() {
        let mut state = AppState::new();
        let Some(WalletCommand::Connect { id }) = state.prepare_connect() else {
            panic!("expected connect command");
        };

        state.handle_wallet_response(WalletResponse::Connected {
            id,
            address: "0xfeed".to_string(),
            network_switched: false,
            switch_error: Some("switch refused".to_string()),
        });
        assert!(state.wallet.connected);
        assert!(state.wrong_network);
    }

    #[test]
    fn test_amount_editing_filters_input() {
        let mut state = AppState::new();
        state.active_panel = Panel::Bridge;
        state.start_editing();

        for c in ['0', '.', '5', 'x', '.'] {
            state.enter_char(c);
        }
        assert_eq!(state.bridge.amount_input, "0.5");

        state.delete_char();
        assert_eq!(state.bridge.amount_input, "0.");
    }

    #[test]
    fn test_unstake_never_goes_negative() {
        let mut state = AppState::new();
        for _ in 0..20 {
            state.unstake();
        }
        assert!(state.staking.staked_xmrt >= 0.0);
    }

    #[test]
    fn test_feed_tick_keeps_capacity() {
        let mut state = AppState::new();
        for _ in 0..5 {
            state.feed_tick();
        }
        assert_eq!(state.feed.entries().len(), 3);
        assert_eq!(state.feed.entries()[0].age_label, "now");
    }
}
