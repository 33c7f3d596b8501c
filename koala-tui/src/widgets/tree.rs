//! Collapsible tree widget.

use crate::state::CatalogRow;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub label: String,
    pub depth: usize,
    pub expanded: bool,
    pub has_children: bool,
}

impl From<&CatalogRow> for TreeItem {
    fn from(row: &CatalogRow) -> Self {
        Self {
            label: row.name.clone(),
            depth: row.depth,
            expanded: row.expanded,
            has_children: row.has_children,
        }
    }
}

impl TreeItem {
    pub fn display(&self) -> String {
        let indent = "  ".repeat(self.depth);
        let marker = match (self.has_children, self.expanded) {
            (true, true) => "▾ ",
            (true, false) => "▸ ",
            (false, _) => "  ",
        };
        format!("{}{}{}", indent, marker, self.label)
    }
}

#[derive(Debug, Clone)]
pub struct TreeStyle {
    pub normal: Style,
    pub selected: Style,
}

impl TreeStyle {
    pub fn new(normal: Style, selected: Style) -> Self {
        Self { normal, selected }
    }
}

pub struct TreeWidget<'a> {
    pub title: &'a str,
    pub items: &'a [TreeItem],
    pub selected: Option<usize>,
    pub style: TreeStyle,
}

impl<'a> TreeWidget<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.display()).style(self.style.normal))
            .collect();

        let list = List::new(rows)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .highlight_style(self.style.selected);

        let mut state = ListState::default();
        state.select(self.selected);
        f.render_stateful_widget(list, area, &mut state);
    }
}
