//! xmrt-dash - actor-based terminal dashboard for the MobileMonero DAO mockup
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events and the feed timer
//! - Wallet Layer (Tokio) - async provider RPC

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use xmrt_dash::app::AppActor;
use xmrt_dash::constants::{
    APP_NAME, APP_TAGLINE, BRIDGE_ETH_BALANCE, EXPLORER_TOKEN_URL, REPO_URL,
};
use xmrt_dash::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use xmrt_dash::messages::{RenderState, UiEvent, WalletCommand, WalletResponse};
use xmrt_dash::ui::{agent_color, border_style, short_address, signed_pct};
use xmrt_dash::wallet::{SimulatedProvider, WalletActor, WalletProvider};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "xmrt-dash.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (wallet_cmd_tx, wallet_cmd_rx) = mpsc::unbounded_channel::<WalletCommand>();
    let (wallet_resp_tx, wallet_resp_rx) = mpsc::unbounded_channel::<WalletResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn wallet actor with the in-memory provider (the dashboard is a
    // mockup; nothing real sits behind the provider trait)
    let provider: Arc<dyn WalletProvider> = Arc::new(SimulatedProvider::new());
    let wallet_actor = WalletActor::new(Some(provider), wallet_resp_tx);
    tokio::spawn(wallet_actor.run(wallet_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(wallet_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, wallet_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Balance
            Constraint::Length(8),  // Mining
            Constraint::Min(5),     // Agents
        ])
        .split(columns[0]);

    draw_balance(f, state, left[0]);
    draw_mining(f, state, left[1]);
    draw_agents(f, state, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),  // Bridge
            Constraint::Length(6),  // Staking
            Constraint::Min(4),     // Footer links
        ])
        .split(columns[1]);

    draw_bridge(f, state, right[0]);
    draw_staking(f, state, right[1]);
    draw_footer(f, right[2]);

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let wallet_text = if state.wallet_busy {
        Span::styled(" Connecting... ", Style::default().fg(Color::Yellow))
    } else if let Some(address) = &state.wallet.address {
        let label = if state.wrong_network {
            format!(" {} [wrong network] ", short_address(address))
        } else {
            format!(" {} ", short_address(address))
        };
        let color = if state.wrong_network { Color::Red } else { Color::Green };
        Span::styled(label, Style::default().fg(Color::Black).bg(color).bold())
    } else {
        Span::styled(
            " Connect Wallet [c] ",
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled(APP_TAGLINE, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("* Live", Style::default().fg(Color::Green)),
        Span::raw("  "),
        wallet_text,
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_balance(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.active_panel == Panel::Balance))
        .title(" Your Balance ");

    let lines = vec![
        Line::from(Span::styled(
            format!("${}", state.balance.usd_balance),
            Style::default().bold(),
        )),
        Line::from(vec![
            Span::styled("24h Change: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                signed_pct(state.balance.day_change_pct),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Portfolio Value: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("${}", state.balance.portfolio_usd)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_mining(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.active_panel == Panel::Mining))
        .title(" Mining Revenue [Active] ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Today's mining
            Constraint::Length(1), // Daily target gauge
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // Miner stats
        ])
        .split(inner);

    let today = Line::from(vec![
        Span::styled("Today's Mining: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("+{:.4} XMR", state.mining.mined_today_xmr),
            Style::default().fg(Color::Green),
        ),
    ]);
    f.render_widget(Paragraph::new(today), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .percent(state.mining.daily_target_pct)
        .label(format!("{}% of daily target", state.mining.daily_target_pct));
    f.render_widget(gauge, rows[1]);

    let stats = Line::from(vec![
        Span::styled(format!("{}", state.mining.active_miners), Style::default().bold()),
        Span::styled(" Miners  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{:.1}", state.mining.hashrate_mhs), Style::default().bold()),
        Span::styled(" MH/s  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("${:.2}", state.mining.daily_usd), Style::default().bold()),
        Span::styled(" Daily", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(stats), rows[3]);
}

fn draw_agents(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.active_panel == Panel::Agents))
        .title(format!(" AI Agents ({} Active) ", state.activities.len()));

    let lines: Vec<Line> = state
        .activities
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{:<11}", entry.agent.as_str()),
                    Style::default().fg(agent_color(entry.agent)).bold(),
                ),
                Span::raw(entry.action.clone()),
                Span::styled(
                    format!("  ({})", entry.age_label),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(list, area);
}

fn draw_bridge(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Bridge;
    let style = if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else {
        border_style(is_focused)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(" Universal Bridge (e:edit f:flip b:bridge) ");

    let amount = if state.bridge_amount.is_empty() {
        "0.0"
    } else {
        state.bridge_amount.as_str()
    };
    let quote = state
        .bridge_quote
        .map(|q| format!("{q:.4}"))
        .unwrap_or_else(|| "0.0".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("From  ", Style::default().fg(Color::DarkGray)),
            Span::styled(amount, Style::default().bold()),
            Span::raw(format!(" {}", state.bridge_direction.from_symbol())),
        ]),
        Line::from(Span::styled(
            format!("      Balance: {BRIDGE_ETH_BALANCE} ETH"),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled("  v", Style::default().fg(Color::DarkGray))),
        Line::from(vec![
            Span::styled("To    ", Style::default().fg(Color::DarkGray)),
            Span::styled(quote, Style::default().bold()),
            Span::raw(format!(" {}", state.bridge_direction.to_symbol())),
        ]),
        Line::from(Span::styled(
            "      Rate: 1 ETH = 50 PI",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "Preview only: bridging moves no assets",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);

    // Cursor over the amount field while editing
    if is_focused && state.input_mode == InputMode::Editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 7 + state.cursor_position as u16).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_staking(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.active_panel == Panel::Staking))
        .title(" XMRT Staking (s:stake u:unstake) ");

    let lines = vec![
        Line::from(vec![
            Span::styled("Staked Amount: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0} XMRT", state.staking.staked_xmrt),
                Style::default().bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("APY: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}%", state.staking.apy_pct),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Source: ", Style::default().fg(Color::DarkGray)),
            Span::raw(REPO_URL),
        ]),
        Line::from(vec![
            Span::styled("Token:  ", Style::default().fg(Color::DarkGray)),
            Span::raw(EXPLORER_TOKEN_URL),
        ]),
        Line::from(Span::styled(
            "(c) 2025 MobileMonero DAO",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let footer = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if let Some(notice) = &state.notice {
        format!(" {notice} ")
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move cursor ".to_string()
    } else {
        " Tab:panel | c:connect wallet | ?:help | q:quit ".to_string()
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(55, 60, area);

    let help_text = r#"
 XMRT DASH - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels

 WALLET
   c                  Connect wallet (switches to Sepolia)

 BRIDGE (preview only)
   e                  Edit amount
   f                  Flip direction
   b / Enter          Show bridge quote

 STAKING (preview only)
   s                  Stake more
   u                  Unstake

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
