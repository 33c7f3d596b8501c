//! Catalog document.

use crate::state::{App, DocumentPage};
use crate::views::helpers::{markdown, placeholder};
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, page: &DocumentPage, area: Rect) {
    if page.path.is_empty() {
        placeholder(f, app, area, "Document", "No document path");
        return;
    }
    let title = page.title.as_deref().unwrap_or(page.path.as_str());
    markdown(app).render(f, area, title, &page.content, page.scroll);
}
