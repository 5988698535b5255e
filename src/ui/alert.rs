//! Blocking alert overlay

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::theme::Theme;

/// Draw the alert centered over everything else
pub fn draw(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let overlay_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.warning))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(theme.fg_muted))),
    ];

    let para = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}
