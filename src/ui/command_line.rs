//! Command line UI component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, InputMode};
use crate::theme::Theme;

/// Draw the command line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, mode: InputMode, theme: &Theme) {
    let line = match mode {
        InputMode::Normal => {
            if let Some(ref msg) = state.message {
                let style = if state.is_error {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.fg_muted)
                };
                Line::from(Span::styled(msg.clone(), style))
            } else {
                Line::from(Span::styled(
                    "Press : for commands, ? for help",
                    Style::default().fg(theme.fg_muted),
                ))
            }
        }
        InputMode::Command => {
            let text = format!(":{}", state.input.text);
            // +1 for the prefix
            build_line_with_cursor(
                &text,
                state.input.cursor + 1,
                Style::default().fg(theme.accent_primary),
                theme,
            )
        }
        InputMode::EditNotes => insert_hint("-- INSERT: notes --", "Esc to finish", theme),
        InputMode::EditQuestion => {
            insert_hint("-- INSERT: question --", "Enter to ask, Esc to cancel", theme)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn insert_hint(label: &'static str, hint: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", hint), Style::default().fg(theme.fg_muted)),
    ])
}

/// Build a line with a visible cursor
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cursor_at_end() {
        let theme = Theme::default();
        let line = build_line_with_cursor(":quiz", 5, Style::default(), &theme);
        assert_eq!(line.spans.len(), 2); // before + cursor (space)
    }

    #[test]
    fn build_cursor_in_middle() {
        let theme = Theme::default();
        let line = build_line_with_cursor(":quiz", 2, Style::default(), &theme);
        assert_eq!(line.spans.len(), 3); // before + cursor + after
    }
}
