//! Key and command reference overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("i", "edit notes (upload) or question (Q&A)"),
    ("arrows, Home/End", "move the cursor while editing notes"),
    ("u", "upload notes and unlock"),
    ("g / Enter", "generate for the current tab"),
    ("1-4, Tab", "switch tab"),
    ("j / k", "scroll results"),
    ("p, Ctrl-v", "paste clipboard into notes"),
    ("e", "save notes as StudyNotes.pdf"),
    (":", "command line"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":file <path>", "select a notes file"),
    (":ask <question>", "ask about your notes"),
    (":summary :flashcards :quiz", "generate"),
    (":section <id>  :tab <id>", "navigate"),
    (":export  :clear  :q", "save, clear notes, quit"),
];

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .title_bottom(Line::from(" [Esc] close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let heading = Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Keys", heading)), Line::from("")];
    lines.extend(KEYS.iter().map(|(key, what)| entry(key, what, theme)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Commands", heading)));
    lines.push(Line::from(""));
    lines.extend(COMMANDS.iter().map(|(cmd, what)| entry(cmd, what, theme)));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn entry(key: &str, what: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<28}", key), Style::default().fg(theme.accent_secondary)),
        Span::styled(what.to_string(), Style::default().fg(theme.fg_primary)),
    ])
}
