//! Status badge span.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub struct StatusBadge<'a> {
    pub label: &'a str,
    pub color: Color,
}

impl<'a> StatusBadge<'a> {
    pub fn new(label: &'a str, color: Color) -> Self {
        Self { label, color }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.label),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )
    }
}
