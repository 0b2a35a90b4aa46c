//! Syntax tree outline rendering

use super::utils::{clamp_scroll, pane_block, token_style};
use crate::parser::{NodeId, SyntaxTree};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// One row of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub id: NodeId,
    /// Which child slot of the parent holds this node; `None` for the root.
    pub slot: Option<&'static str>,
}

/// Flatten `tree` in traversal order (node, right, left) with depths.
pub fn outline(tree: &SyntaxTree) -> Vec<OutlineRow> {
    let mut rows = Vec::with_capacity(tree.len());
    collect(tree, tree.root_id(), 0, None, &mut rows);
    rows
}

fn collect(
    tree: &SyntaxTree,
    id: NodeId,
    depth: usize,
    slot: Option<&'static str>,
    rows: &mut Vec<OutlineRow>,
) {
    rows.push(OutlineRow { depth, id, slot });
    let Some(node) = tree.node(id) else {
        return;
    };
    if let Some(right) = node.right_child {
        collect(tree, right, depth + 1, Some("right"), rows);
    }
    if let Some(left) = node.left_child {
        collect(tree, left, depth + 1, Some("left"), rows);
    }
}

/// Render the tree as an indented outline.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: Option<&SyntaxTree>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    let Some(tree) = tree else {
        let paragraph = Paragraph::new("(no tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let rows = outline(tree);
    let skip = clamp_scroll(rows.len(), area.height, scroll_offset);
    let items: Vec<ListItem> = rows
        .iter()
        .skip(skip)
        .filter_map(|row| {
            let node = tree.node(row.id)?;
            let token_type = node.token.as_ref().map(|t| t.token_type())?;
            let mut spans = vec![Span::raw("  ".repeat(row.depth))];
            if let Some(slot) = row.slot {
                spans.push(Span::styled(
                    format!("{}: ", slot),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            spans.push(Span::styled(node.to_string(), token_style(token_type)));
            spans.push(Span::styled(
                format!("  {}", node.kind),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            Some(ListItem::new(Line::from(spans)))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_outline_follows_traversal_order() {
        let tree = Parser::new().parse("x-2*y").unwrap();
        let rows = outline(&tree);

        let texts: Vec<String> = rows
            .iter()
            .map(|row| tree.node(row.id).unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["-", "x", "*", "2", "y"]);

        let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 2]);
        assert_eq!(rows[0].slot, None);
        assert_eq!(rows[1].slot, Some("right"));
        assert_eq!(rows[2].slot, Some("left"));
    }
}
