//! Key mapping for normal mode

use crossterm::event::{KeyCode, KeyModifiers};

use crate::view::TabId;

/// Map a key in normal mode to an action
pub fn key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('v') => Some(Action::Paste),
            KeyCode::Char('d') => Some(Action::ScrollDown),
            KeyCode::Char('u') => Some(Action::ScrollUp),
            _ => None,
        };
    }

    match key {
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('i') => Some(Action::Edit),
        KeyCode::Char('u') => Some(Action::Upload),
        KeyCode::Char('g') | KeyCode::Enter => Some(Action::Generate),
        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::Char('p') => Some(Action::Paste),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::Char('1') => Some(Action::Tab(TabId::Summary)),
        KeyCode::Char('2') => Some(Action::Tab(TabId::Flashcards)),
        KeyCode::Char('3') => Some(Action::Tab(TabId::Qa)),
        KeyCode::Char('4') => Some(Action::Tab(TabId::Quiz)),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Esc => Some(Action::Back),
        // Note: 'q' intentionally not mapped - use :q command to quit
        _ => None,
    }
}

/// Actions that can be taken in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Modes
    CommandMode,
    Edit,
    Help,
    Back,

    // Upload gate and navigation
    Upload,
    Tab(TabId),
    NextTab,
    PrevTab,

    // Output areas
    Generate,
    ScrollUp,
    ScrollDown,

    // Notes
    Paste,
    Export,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_select_tabs() {
        assert_eq!(
            key_to_action(KeyCode::Char('3'), KeyModifiers::NONE),
            Some(Action::Tab(TabId::Qa))
        );
    }

    #[test]
    fn q_is_not_mapped() {
        assert_eq!(key_to_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    }

    #[test]
    fn enter_generates() {
        assert_eq!(key_to_action(KeyCode::Enter, KeyModifiers::NONE), Some(Action::Generate));
    }

    #[test]
    fn ctrl_v_pastes() {
        assert_eq!(key_to_action(KeyCode::Char('v'), KeyModifiers::CONTROL), Some(Action::Paste));
    }

    #[test]
    fn ctrl_u_scrolls_instead_of_uploading() {
        assert_eq!(key_to_action(KeyCode::Char('u'), KeyModifiers::CONTROL), Some(Action::ScrollUp));
        assert_eq!(key_to_action(KeyCode::Char('u'), KeyModifiers::NONE), Some(Action::Upload));
    }
}
