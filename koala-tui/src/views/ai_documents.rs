//! Generated document list for one warehouse.

use crate::state::{position_of, AiDocumentsPage, App};
use crate::views::helpers::two_column;
use crate::widgets::DetailPanel;
use koala_core::time::format_short;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, page: &AiDocumentsPage, area: Rect) {
    let (list_area, detail_area) = two_column(area, 55);

    let items: Vec<ListItem> = page
        .documents
        .iter()
        .map(|doc| ListItem::new(format!("{} [{}]", doc.title, doc.doc_type)))
        .collect();

    let mut state = ListState::default();
    state.select(position_of(&page.documents, &page.selected));
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("AI Documents | {}", page.warehouse_id))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut detail = DetailPanel::new("Details", Style::default().fg(app.theme.secondary));
    if let Some(doc) = page.selected_document() {
        detail.push("Title", doc.title.clone());
        detail.push("Type", doc.doc_type.clone());
        detail.push_opt("Status", doc.status.as_deref());
        detail.push_opt("Service", doc.service_name.as_deref());
        detail.push_opt("Error", doc.error_message.as_deref());
        detail.push("Created", format_short(doc.created_at.as_ref()));
        detail.push("Updated", format_short(doc.updated_at.as_ref()));
    }
    detail.render(f, detail_area);
}
