//! Download section: preview of what the PDF will contain

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::export::{EXPORT_FILE_NAME, NotesLayout};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [preview_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(area);

    let layout = NotesLayout::from_text(state.upload.text());
    let pages = layout.pages().len();

    let block = Block::default()
        .title(format!(" {} preview ({} page{}) ", EXPORT_FILE_NAME, pages, if pages == 1 { "" } else { "s" }))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let lines: Vec<Line> = layout
        .pages()
        .first()
        .map(|page| page.iter().map(|l| Line::from(l.as_str())).collect())
        .unwrap_or_default();
    let preview = Paragraph::new(lines).style(Style::default().fg(theme.fg_secondary)).block(block);
    frame.render_widget(preview, preview_area);

    let status = match &state.last_export {
        Some(path) => Line::from(vec![
            Span::styled("Last saved: ", Style::default().fg(theme.fg_muted)),
            Span::styled(path.display().to_string(), Style::default().fg(theme.success)),
        ]),
        None => Line::from(Span::styled(
            "Press e to save your notes as a PDF",
            Style::default().fg(theme.fg_muted),
        )),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}
