//! Single generated document.

use crate::state::{AiDocumentDetailPage, App};
use crate::views::helpers::{markdown, placeholder};
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, page: &AiDocumentDetailPage, area: Rect) {
    let Some(doc) = &page.document else {
        placeholder(f, app, area, "AI Document", "No document");
        return;
    };
    markdown(app).render(f, area, &doc.title, page.content(), page.scroll);
}
