//! Layout utilities and common components

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
};
use textwrap::wrap;

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Split multi-line text into lines, drawing a block cursor at `cursor`
pub fn lines_with_cursor(
    text: &str,
    cursor: usize,
    base_style: Style,
    cursor_style: Style,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();

    for (i, c) in text.chars().enumerate() {
        if i == cursor {
            if !current.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut current), base_style));
            }
            let shown = if c == '\n' { ' ' } else { c };
            spans.push(Span::styled(shown.to_string(), cursor_style));
            if c == '\n' {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            continue;
        }

        if c == '\n' {
            if !current.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut current), base_style));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, base_style));
    }
    if cursor >= text.chars().count() {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}

/// Screen row (0-based) the cursor lands on once lines wrap at `width`
pub fn cursor_row(text: &str, cursor: usize, width: usize) -> usize {
    let width = width.max(1);
    let before: String = text.chars().take(cursor).collect();
    let mut lines = before.split('\n');
    let partial = lines.next_back().unwrap_or_default();

    // Lines above the cursor are complete, so wrap them in full
    let above: usize = text
        .split('\n')
        .take(lines.count())
        .map(|line| wrap(line, width).len().max(1))
        .sum();
    above + wrap(partial, width).len().max(1) - 1
}
