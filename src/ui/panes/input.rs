//! Expression input line and parse result rendering

use super::utils::pane_block;
use crate::ui::app::Outcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the line being edited, with a block cursor at its end.
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, is_focused: bool) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "█",
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(pane_block(" Expression ", is_focused));
    frame.render_widget(paragraph, area);
}

/// Render the prefix form of the last submitted expression, or its error.
pub fn render_result_pane(frame: &mut Frame, area: Rect, outcome: Option<&Outcome>) {
    let block = pane_block(" Prefix ", false);

    let line = match outcome.map(|o| &o.result) {
        None => Line::from(Span::styled(
            "(press Enter to parse)",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Some(Ok(tree)) => Line::from(Span::styled(
            tree.print_tree(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )),
        Some(Err(e)) => Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        )),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
