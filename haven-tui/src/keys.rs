//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    CycleSort,
    CycleStatus,
    CycleType,
    CycleCity,
    RaiseMinBeds,
    LowerMinBeds,
    ClearFilters,
    OpenSearch,
    OpenMinPrice,
    OpenMaxPrice,
    OpenHelp,
    Refresh,
    Confirm,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('s') => Some(Action::CycleSort),
        KeyCode::Char('f') => Some(Action::CycleStatus),
        KeyCode::Char('t') => Some(Action::CycleType),
        KeyCode::Char('c') => Some(Action::CycleCity),
        KeyCode::Char('+') => Some(Action::RaiseMinBeds),
        KeyCode::Char('-') => Some(Action::LowerMinBeds),
        KeyCode::Char('x') => Some(Action::ClearFilters),
        KeyCode::Char('p') => Some(Action::OpenMinPrice),
        KeyCode::Char('P') => Some(Action::OpenMaxPrice),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char('1') => Some(Action::SwitchView(0)),
        KeyCode::Char('2') => Some(Action::SwitchView(1)),
        _ => None,
    }
}
