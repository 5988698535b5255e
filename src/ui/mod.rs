//! UI rendering components

pub mod alert;
pub mod command_line;
pub mod export_panel;
pub mod help;
pub mod layout;
pub mod main_screen;
pub mod sidebar;
pub mod tabs;
pub mod upload;

use ratatui::Frame;

use crate::app::state::AppState;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    main_screen::draw(frame, state, theme);

    if state.show_help {
        help::draw(frame, frame.area(), theme);
    }

    // Alerts sit above everything, help included
    if let Some(message) = &state.alert {
        alert::draw(frame, frame.area(), message, theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::study::Rendered;
    use crate::view::TabId;

    fn render(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::default();
        terminal.draw(|frame| draw(frame, state, &theme)).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn locked_screen_shows_upload_form() {
        let mut state = AppState::default();
        let screen = render(&mut state);
        assert!(screen.contains("Paste your notes"));
        assert!(screen.contains("Upload notes to unlock"));
    }

    #[test]
    fn alert_is_drawn_on_top() {
        let mut state = AppState::default();
        state.alert("Please upload your notes first!");
        let screen = render(&mut state);
        assert!(screen.contains("Please upload your notes first!"));
    }

    #[test]
    fn summary_text_is_rendered() {
        let mut state = AppState::default();
        state.view.unlock_after_upload(true, false).unwrap();
        state.outputs.summary.content = Some(Rendered::Text("Five key points".to_string()));
        let screen = render(&mut state);
        assert!(screen.contains("Five key points"));
    }

    #[test]
    fn flashcards_render_each_card() {
        let mut state = AppState::default();
        state.view.unlock_after_upload(true, false).unwrap();
        state.view.activate_tab(TabId::Flashcards).unwrap();
        state.outputs.flashcards.content =
            Some(Rendered::Cards(vec!["Alpha card".to_string(), "Beta card".to_string()]));
        let screen = render(&mut state);
        assert!(screen.contains("Alpha card"));
        assert!(screen.contains("Beta card"));
    }

    #[test]
    fn loading_hint_is_shown() {
        let mut state = AppState::default();
        state.view.unlock_after_upload(true, false).unwrap();
        state.outputs.summary.pending = 1;
        let screen = render(&mut state);
        assert!(screen.contains("Generating summary..."));
    }
}
