//! Session history rendering

use super::utils::{clamp_scroll, pane_block};
use crate::ui::app::HistoryEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render every submitted expression with its result, oldest first.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &[HistoryEntry],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" History ", is_focused);

    if history.is_empty() {
        let paragraph = Paragraph::new("(nothing parsed yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let skip = clamp_scroll(history.len(), area.height, scroll_offset);
    let items: Vec<ListItem> = history
        .iter()
        .skip(skip)
        .map(|entry| {
            let result_color = if entry.accepted {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.error
            };
            ListItem::new(Line::from(vec![
                Span::styled(entry.expression.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(" => ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(entry.output.clone(), Style::default().fg(result_color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
