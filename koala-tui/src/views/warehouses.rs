//! Warehouse list view.

use crate::state::{position_of, App, WarehousesPage};
use crate::theme::warehouse_status_color;
use crate::views::helpers::two_column;
use crate::widgets::{DetailPanel, StatusBadge};
use koala_core::time::format_short;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, page: &WarehousesPage, area: Rect) {
    let (list_area, detail_area) = two_column(area, 60);

    let items: Vec<ListItem> = page
        .warehouses
        .iter()
        .map(|warehouse| {
            let color = warehouse_status_color(&warehouse.status, &app.theme);
            ListItem::new(Line::from(vec![
                StatusBadge::new(warehouse.status.as_str(), color).span(),
                Span::raw(format!(" {}", warehouse.name)),
            ]))
        })
        .collect();

    let mut title = format!(
        "Warehouses {}/{} ({} total)",
        page.query.page,
        page.total_pages(),
        page.total
    );
    if !page.query.keyword.is_empty() {
        title.push_str(&format!(" [{}]", page.query.keyword));
    }

    let mut state = ListState::default();
    state.select(position_of(&page.warehouses, &page.selected));
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary).bg(app.theme.bg_highlight));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut detail = DetailPanel::new("Details", Style::default().fg(app.theme.secondary));
    if let Some(warehouse) = page.selected_warehouse() {
        detail.push("Name", warehouse.name.clone());
        detail.push("Address", warehouse.address.clone());
        detail.push_opt("Branch", warehouse.branch.as_deref());
        detail.push("Status", warehouse.status.to_string());
        detail.push_opt("Organization", warehouse.organization_name.as_deref());
        detail.push_opt("Description", warehouse.description.as_deref());
        detail.push_opt("Error", warehouse.error.as_deref());
        detail.push("Created", format_short(warehouse.created_at.as_ref()));
        detail.push("Updated", format_short(warehouse.updated_at.as_ref()));
    }
    detail.render(f, detail_area);
}
