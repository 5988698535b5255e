//! Tabbed content area: tab bar plus the active output panel

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use textwrap::wrap;

use super::layout::lines_with_cursor;
use crate::app::state::{AppState, InputMode, OutputArea};
use crate::study::{Capability, Rendered};
use crate::theme::Theme;
use crate::view::{TabId, TabSelector};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [bar_area, panel_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

    draw_tab_bar(frame, bar_area, state.view.selectors(), theme);

    let tab = state.view.active_tab();
    let block = Block::default()
        .title(format!(" {} ", tab.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let capability = Capability::from(tab);
    let output = state.outputs.get(capability);

    if tab == TabId::Qa {
        let [question_area, answer_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);
        draw_question(frame, question_area, state, theme);
        draw_output(frame, answer_area, capability, output, theme);
    } else {
        draw_output(frame, inner, capability, output, theme);
    }
}

/// Render one selector per tab, highlighting the active one
fn draw_tab_bar(frame: &mut Frame, area: Rect, selectors: &[TabSelector], theme: &Theme) {
    let mut spans = Vec::new();
    for (i, selector) in selectors.iter().enumerate() {
        let style = if selector.active {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary).bg(theme.bg_tertiary)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, selector.target.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_question(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let editing = state.mode == InputMode::EditQuestion;
    let border_color = if editing { theme.border_focused } else { theme.border };

    let block = Block::default()
        .title(" Your question ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let question = &state.question;
    let line = if editing {
        let cursor = Style::default().fg(theme.bg_primary).bg(theme.fg_primary);
        lines_with_cursor(&question.text, question.cursor, Style::default().fg(theme.fg_primary), cursor)
            .into_iter()
            .next()
            .unwrap_or_default()
    } else if question.is_empty() {
        Line::from(Span::styled("Press i to type a question", Style::default().fg(theme.fg_muted)))
    } else {
        Line::from(Span::styled(question.text.clone(), Style::default().fg(theme.fg_primary)))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_output(
    frame: &mut Frame,
    area: Rect,
    capability: Capability,
    output: &OutputArea,
    theme: &Theme,
) {
    let mut area = area;
    if output.is_loading() {
        let [status, rest] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        let text = format!("Generating {}...", capability.display_name());
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(theme.info))),
            status,
        );
        area = rest;
    }

    match &output.content {
        None => {
            if !output.is_loading() {
                let hint = Paragraph::new(empty_hint(capability))
                    .style(Style::default().fg(theme.fg_muted))
                    .wrap(Wrap { trim: true });
                frame.render_widget(hint, area);
            }
        }
        Some(Rendered::Text(text)) => {
            let para = Paragraph::new(text.as_str())
                .style(Style::default().fg(theme.fg_primary))
                .scroll((u16::try_from(output.scroll).unwrap_or(u16::MAX), 0))
                .wrap(Wrap { trim: false });
            frame.render_widget(para, area);
        }
        Some(Rendered::Fallback(message)) => {
            let para = Paragraph::new(message.as_str())
                .style(Style::default().fg(theme.warning))
                .wrap(Wrap { trim: true });
            frame.render_widget(para, area);
        }
        Some(Rendered::Cards(cards)) => draw_cards(frame, area, cards, output.scroll, theme),
    }
}

fn empty_hint(capability: Capability) -> &'static str {
    match capability {
        Capability::Summary => "Press g to summarize your notes.",
        Capability::Flashcards => "Press g to turn your notes into flashcards.",
        Capability::Qa => "Type a question, then press Enter to ask it.",
        Capability::Quiz => "Press g to generate a quiz.",
    }
}

/// Stack cards vertically starting from the `skip`-th card
///
/// A card's first line is its heading; the remaining lines are its body.
fn draw_cards(frame: &mut Frame, area: Rect, cards: &[String], skip: usize, theme: &Theme) {
    let text_width = area.width.saturating_sub(4).max(1) as usize;
    let mut y = area.y;
    let bottom = area.y + area.height;

    for card in cards.iter().skip(skip) {
        if y >= bottom {
            break;
        }
        let height =
            u16::try_from(card_height(card, text_width)).unwrap_or(u16::MAX).min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);

        let (heading, body) = card_parts(card);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", heading),
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.card_border))
            .style(Style::default().bg(theme.card_bg));
        let para = Paragraph::new(body)
            .style(Style::default().fg(theme.fg_primary))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(para, card_area);

        y += height;
    }
}

/// Split a card into its heading line and the body below it
pub(crate) fn card_parts(card: &str) -> (&str, &str) {
    match card.split_once('\n') {
        Some((heading, body)) => (heading, body),
        None => (card, ""),
    }
}

/// Rows a card needs, borders included
pub(crate) fn card_height(card: &str, text_width: usize) -> usize {
    let (_, body) = card_parts(card);
    let rows: usize = body.lines().map(|line| wrap(line, text_width).len().max(1)).sum();
    rows.max(1) + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_heading_is_first_line() {
        assert_eq!(
            card_parts("Q: what is ATP?\nA: energy\nB: sugar"),
            ("Q: what is ATP?", "A: energy\nB: sugar")
        );
        assert_eq!(card_parts("lonely heading"), ("lonely heading", ""));
    }

    #[test]
    fn card_height_counts_body_lines() {
        assert_eq!(card_height("heading only", 40), 3);
        assert_eq!(card_height("Q: one\nA: two", 40), 3);
        assert_eq!(card_height("Q\nA: one\nB: two", 40), 4);
        assert_eq!(card_height(&format!("Q\n{}", "word ".repeat(20)), 10), 12);
    }

    #[test]
    fn blank_line_inside_body_counts() {
        assert_eq!(card_height("Q\na\n \nb", 40), 5);
    }
}
