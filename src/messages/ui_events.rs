//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Wallet
    ConnectWallet,

    // Bridge amount editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Preview actions (no transaction of any kind)
    FlipBridge,
    SubmitBridge,
    StakeMore,
    Unstake,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Balance,
    Mining,
    Agents,
    Bridge,
    Staking,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Balance => Panel::Mining,
            Panel::Mining => Panel::Agents,
            Panel::Agents => Panel::Bridge,
            Panel::Bridge => Panel::Staking,
            Panel::Staking => Panel::Balance,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Balance => Panel::Staking,
            Panel::Mining => Panel::Balance,
            Panel::Agents => Panel::Mining,
            Panel::Bridge => Panel::Agents,
            Panel::Staking => Panel::Bridge,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('c') => Some(UiEvent::ConnectWallet),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('e') if active_panel == Panel::Bridge => Some(UiEvent::StartEditing),
            KeyCode::Char('f') if active_panel == Panel::Bridge => Some(UiEvent::FlipBridge),
            KeyCode::Char('b') if active_panel == Panel::Bridge => Some(UiEvent::SubmitBridge),
            KeyCode::Char('s') if active_panel == Panel::Staking => Some(UiEvent::StakeMore),
            KeyCode::Char('u') if active_panel == Panel::Staking => Some(UiEvent::Unstake),
            KeyCode::Enter => match active_panel {
                Panel::Bridge => Some(UiEvent::SubmitBridge),
                Panel::Staking => Some(UiEvent::StakeMore),
                _ => None,
            },
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
