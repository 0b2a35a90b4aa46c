//! Token table rendering

use super::utils::{clamp_scroll, pane_block, token_style};
use crate::parser::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render one row per token: index, text, and type.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tokens ", is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let skip = clamp_scroll(tokens.len(), area.height, scroll_offset);
    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, token)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", i), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<8}", token.text()), token_style(token.token_type())),
                Span::styled(
                    token.token_type().to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
