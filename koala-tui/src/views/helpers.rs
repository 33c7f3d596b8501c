//! Common view rendering helpers.

use crate::state::App;
use crate::widgets::MarkdownRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Left list and right detail columns.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn markdown(app: &App) -> MarkdownRenderer {
    MarkdownRenderer {
        heading_color: app.theme.primary,
        code_color: app.theme.tertiary,
        bullet_color: app.theme.secondary,
        quote_color: app.theme.text_dim,
        text_color: app.theme.text,
    }
}

pub fn placeholder(f: &mut Frame<'_>, app: &App, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(app.theme.text_muted))
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
