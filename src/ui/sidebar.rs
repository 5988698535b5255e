//! Sidebar navigation

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;
use crate::view::ViewState;

const MARK_ACTIVE: &str = "▸";
const MARK_LOCKED: &str = "·";

/// Draw the section list
pub fn draw(frame: &mut Frame, area: Rect, view: &ViewState, theme: &Theme) {
    let block = Block::default()
        .title(" Studymate ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for entry in view.sidebar() {
        let active = entry.section == view.active_section();
        let (marker, style) = if entry.disabled {
            (MARK_LOCKED, Style::default().fg(theme.disabled))
        } else if active {
            (
                MARK_ACTIVE,
                Style::default()
                    .fg(theme.accent_primary)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" ", Style::default().fg(theme.fg_secondary))
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(entry.section.label(), style),
        ]));
    }

    if !view.notes_uploaded() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Upload notes to unlock",
            Style::default().fg(theme.fg_muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
