//! Cross-warehouse domains.

use crate::state::{App, GlobalDomainsPage};
use crate::views::domains::{domain_fields, render_rows, service_fields};
use crate::views::helpers::two_column;
use crate::widgets::DetailPanel;
use ratatui::{layout::Rect, style::Style, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, page: &GlobalDomainsPage, area: Rect) {
    let (list_area, detail_area) = two_column(area, 55);
    let rows = page.rows();
    render_rows(
        f,
        &app.theme,
        list_area,
        "Global Domains",
        &page.domains,
        &rows,
        page.cursor,
        page.generating.as_deref(),
        &|service| {
            service
                .warehouse_id
                .as_deref()
                .map(|id| page.warehouse_name(id).to_string())
        },
    );

    let mut detail = DetailPanel::new("Details", Style::default().fg(app.theme.secondary));
    if let Some((_, service)) = page.selected_service() {
        service_fields(&mut detail, service);
        if let Some(warehouse_id) = service.warehouse_id.as_deref() {
            detail.push("Warehouse", page.warehouse_name(warehouse_id).to_string());
        }
    } else if let Some(domain) = page.selected_domain() {
        domain_fields(&mut detail, domain);
    }
    detail.render(f, detail_area);
}
