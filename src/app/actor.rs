//! App actor - message loop processing UI events, wallet responses and
//! feed-timer ticks
//!
//! The feed timer lives here: one `tokio::time::interval`, each tick handled
//! to completion inside `select!`, so ticks never overlap. Dropping the
//! actor (Quit) drops the timer and no further entries are produced.

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::app::state::AppState;
use crate::constants::FEED_TICK_PERIOD;
use crate::messages::{RenderState, UiEvent, WalletCommand, WalletResponse};

/// App actor that processes UI events, wallet responses and timer ticks
pub struct AppActor {
    state: AppState,
    wallet_tx: mpsc::UnboundedSender<WalletCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        wallet_tx: mpsc::UnboundedSender<WalletCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            wallet_tx,
            render_tx,
        }
    }

    #[cfg(test)]
    fn with_state(
        state: AppState,
        wallet_tx: mpsc::UnboundedSender<WalletCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            wallet_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut wallet_rx: mpsc::UnboundedReceiver<WalletResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        // First rotation fires one full period after startup, not immediately
        let mut feed_timer =
            time::interval_at(Instant::now() + FEED_TICK_PERIOD, FEED_TICK_PERIOD);

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.wallet_tx.send(WalletCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = wallet_rx.recv() => {
                    self.state.handle_wallet_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                _ = feed_timer.tick() => {
                    self.state.feed_tick();
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Panel navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),

            // Wallet
            UiEvent::ConnectWallet => {
                if let Some(cmd) = self.state.prepare_connect() {
                    let _ = self.wallet_tx.send(cmd);
                }
            }

            // Bridge amount editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Preview actions
            UiEvent::FlipBridge => self.state.flip_bridge(),
            UiEvent::SubmitBridge => self.state.submit_bridge(),
            UiEvent::StakeMore => self.state.stake_more(),
            UiEvent::Unstake => self.state.unstake(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::IndexSource;
    use crate::models::{Agent, ACTIVITY_ACTIONS};

    /// Always picks index 0 (Executive / first action)
    struct Zeroes;

    impl IndexSource for Zeroes {
        fn pick(&mut self, _bound: usize) -> usize {
            0
        }
    }

    fn spawn_actor() -> (
        mpsc::UnboundedSender<UiEvent>,
        mpsc::UnboundedSender<WalletResponse>,
        mpsc::UnboundedReceiver<WalletCommand>,
        mpsc::UnboundedReceiver<RenderState>,
    ) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (wallet_resp_tx, wallet_rx) = mpsc::unbounded_channel();
        let (wallet_cmd_tx, wallet_cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let actor =
            AppActor::with_state(AppState::with_feed_source(Box::new(Zeroes)), wallet_cmd_tx, render_tx);
        tokio::spawn(actor.run(ui_rx, wallet_rx));

        (ui_tx, wallet_resp_tx, wallet_cmd_rx, render_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_rotates_every_period() {
        let (_ui_tx, _wallet_resp_tx, _wallet_cmd_rx, mut render_rx) = spawn_actor();

        // Initial render carries the untouched seed feed
        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.activities[0].age_label, "2m ago");

        // Paused time auto-advances to the next timer deadline
        let after_tick = render_rx.recv().await.unwrap();
        assert_eq!(after_tick.activities.len(), 3);
        assert_eq!(after_tick.activities[0].agent, Agent::Executive);
        assert_eq!(after_tick.activities[0].action, ACTIVITY_ACTIONS[0]);
        assert_eq!(after_tick.activities[0].age_label, "now");
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_feed_generation() {
        let (ui_tx, _wallet_resp_tx, mut wallet_cmd_rx, mut render_rx) = spawn_actor();

        let _ = render_rx.recv().await.unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();

        // Actor forwards shutdown to the wallet layer and exits
        let cmd = wallet_cmd_rx.recv().await.unwrap();
        assert!(matches!(cmd, WalletCommand::Shutdown));

        // Channel closes with the actor; however much time elapses,
        // no further render (and so no further entry) ever arrives.
        tokio::time::advance(FEED_TICK_PERIOD * 10).await;
        assert!(render_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_event_emits_wallet_command() {
        let (ui_tx, wallet_resp_tx, mut wallet_cmd_rx, mut render_rx) = spawn_actor();

        let _ = render_rx.recv().await.unwrap();
        ui_tx.send(UiEvent::ConnectWallet).unwrap();

        let cmd = wallet_cmd_rx.recv().await.unwrap();
        let WalletCommand::Connect { id } = cmd else {
            panic!("expected connect command");
        };

        wallet_resp_tx
            .send(WalletResponse::Connected {
                id,
                address: "0xfeed".to_string(),
                network_switched: true,
                switch_error: None,
            })
            .unwrap();

        // Skip the render emitted for the ConnectWallet event itself
        let busy = render_rx.recv().await.unwrap();
        assert!(busy.wallet_busy);

        let connected = render_rx.recv().await.unwrap();
        assert!(connected.wallet.connected);
        assert_eq!(connected.wallet.address.as_deref(), Some("0xfeed"));
    }
}
