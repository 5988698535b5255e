//! Upload section: notes editor and file selection

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::{cursor_row, lines_with_cursor};
use crate::app::state::{AppState, InputMode};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [notes_area, file_area, hint_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(3), Constraint::Length(1)])
            .areas(area);

    draw_notes(frame, notes_area, state, theme);
    draw_file(frame, file_area, state, theme);

    let hint = if state.view.notes_uploaded() {
        "[i] edit  [p] paste  [u] re-open summary"
    } else {
        "[i] type notes  [p] paste  :file <path> select a file  [u] upload"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(theme.fg_muted))),
        hint_area,
    );
}

fn draw_notes(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let editing = state.mode == InputMode::EditNotes;
    let border_color = if editing { theme.border_focused } else { theme.border };

    let block = Block::default()
        .title(" Paste your notes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let notes = &state.upload.notes;
    if notes.is_empty() && !editing {
        let msg = Paragraph::new("No notes yet.\n\nPress i to start typing or p to paste.")
            .style(Style::default().fg(theme.fg_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    let base = Style::default().fg(theme.fg_primary);
    let lines = if editing {
        let cursor = Style::default().fg(theme.bg_primary).bg(theme.fg_primary);
        lines_with_cursor(&notes.text, notes.cursor, base, cursor)
    } else {
        notes.text.lines().map(|l| Line::from(Span::styled(l.to_string(), base))).collect()
    };

    // Keep the cursor line on screen
    let visible = inner.height as usize;
    let scroll = if editing {
        cursor_row(&notes.text, notes.cursor, inner.width as usize)
            .saturating_sub(visible.saturating_sub(1))
    } else {
        0
    };

    let para = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

fn draw_file(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Or upload a file ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let line = match &state.upload.file {
        Some(path) => Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(theme.fg_muted)),
            Span::styled(
                path.display().to_string(),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled("No file selected", Style::default().fg(theme.fg_muted))),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
