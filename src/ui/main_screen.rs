//! Main screen: sidebar, active section and command line

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{command_line, export_panel, sidebar, tabs, upload};
use crate::app::state::AppState;
use crate::theme::Theme;
use crate::view::SectionId;

/// Minimum width for the sidebar
const SIDEBAR_MIN_WIDTH: u16 = 22;

/// Draw the main screen
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();

    // Split vertically: main area and command line
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let main_area = vertical_chunks[0];
    let command_area = vertical_chunks[1];

    let [sidebar_area, body_area] = create_layout(main_area);

    sidebar::draw(frame, sidebar_area, &state.view, theme);

    match state.view.active_section() {
        SectionId::Upload => upload::draw(frame, body_area, state, theme),
        SectionId::Export => export_panel::draw(frame, body_area, state, theme),
        _ if state.view.content_visible() => tabs::draw(frame, body_area, state, theme),
        _ => {}
    }

    command_line::draw(frame, command_area, &state.command_line, state.mode, theme);
}

/// Sidebar takes a fifth of the width, never less than its minimum
fn create_layout(area: Rect) -> [Rect; 2] {
    let sidebar_width = (area.width / 5).max(SIDEBAR_MIN_WIDTH).min(area.width);
    Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).areas(area)
}
