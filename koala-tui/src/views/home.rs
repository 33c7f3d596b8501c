//! Landing view.

use crate::nav::Tab;
use crate::state::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "KoalaWiki console",
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("API: {}", app.config.api_base_url)),
        Line::from(""),
    ];
    lines.extend(Tab::all().iter().enumerate().map(|(index, tab)| {
        Line::from(vec![
            Span::styled(
                format!("[{}] ", index + 1),
                Style::default().fg(app.theme.secondary),
            ),
            Span::raw(format!("{:<12}{}", tab.title(), tab.route().to_path())),
        ])
    }));
    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Home").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
