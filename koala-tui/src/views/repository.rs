//! Warehouse detail with its document catalog.

use crate::state::{App, RepositoryPage};
use crate::theme::warehouse_status_color;
use crate::views::helpers::two_column;
use crate::widgets::{DetailPanel, TreeItem, TreeStyle, TreeWidget};
use ratatui::{layout::Rect, style::Style, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, page: &RepositoryPage, area: Rect) {
    let (tree_area, detail_area) = two_column(area, 50);

    let rows = page.rows();
    let items: Vec<TreeItem> = rows.iter().map(TreeItem::from).collect();
    let selected = if items.is_empty() {
        None
    } else {
        Some(page.cursor.min(items.len() - 1))
    };
    let tree = TreeWidget {
        title: "Catalog",
        items: &items,
        selected,
        style: TreeStyle::new(
            Style::default().fg(app.theme.text),
            Style::default().fg(app.theme.primary).bg(app.theme.bg_highlight),
        ),
    };
    tree.render(f, tree_area);

    let status_color = page
        .warehouse
        .as_ref()
        .map(|w| warehouse_status_color(&w.status, &app.theme))
        .unwrap_or(app.theme.secondary);
    let mut detail = DetailPanel::new("Repository", Style::default().fg(status_color));
    detail.push("ID", page.warehouse_id.clone());
    if let Some(warehouse) = &page.warehouse {
        detail.push("Name", warehouse.name.clone());
        detail.push("Address", warehouse.address.clone());
        detail.push_opt("Branch", warehouse.branch.as_deref());
        detail.push("Status", warehouse.status.to_string());
        detail.push_opt("Description", warehouse.description.as_deref());
    }
    if let Some(row) = rows.get(page.cursor) {
        detail.push_opt("Selected", row.path.as_deref());
    }
    detail.render(f, detail_area);
}
