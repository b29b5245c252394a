//! Shared UI helpers - colors and formatting for the dashboard widgets

use ratatui::prelude::*;

use crate::models::Agent;

/// Color used for an agent's name in the activity feed
pub fn agent_color(agent: Agent) -> Color {
    match agent {
        Agent::Executive => Color::Cyan,
        Agent::Operations => Color::Yellow,
        Agent::Financial => Color::Magenta,
    }
}

/// Shortens an address to the `0x1234...abcd` form used in the header button
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Formats a signed percentage with its leading sign, e.g. `+2.14%`
pub fn signed_pct(value: f64) -> String {
    format!("{value:+.2}%")
}

/// Style for the focused-panel border
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
