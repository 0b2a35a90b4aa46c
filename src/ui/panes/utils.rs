//! Helpers shared by the pane renderers

use crate::parser::TokenType;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Bordered block with a title, highlighted when focused.
pub fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` so the last page stays full, and return it.
///
/// `height` is the outer pane height; two rows go to the borders.
pub fn clamp_scroll(total_items: usize, height: u16, scroll_offset: &mut usize) -> usize {
    let visible_height = height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }
    *scroll_offset
}

/// Foreground style for a token of the given type.
pub fn token_style(token_type: TokenType) -> Style {
    let color = match token_type {
        TokenType::Number => DEFAULT_THEME.number,
        TokenType::Id => DEFAULT_THEME.identifier,
        TokenType::Op => DEFAULT_THEME.operator,
        TokenType::Undefined => DEFAULT_THEME.error,
    };
    Style::default().fg(color)
}
