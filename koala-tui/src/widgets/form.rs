//! Form dialog widget.

use crate::forms::{FieldInput, Form};
use crate::widgets::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct FormWidget<'a> {
    pub form: &'a Form,
    pub label_color: Color,
    pub focus_color: Color,
}

impl<'a> FormWidget<'a> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, field) in self.form.fields.iter().enumerate() {
            let focused = index == self.form.focus;
            let marker = if field.required { "*" } else { " " };
            let label_style = if focused {
                Style::default()
                    .fg(self.focus_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.label_color)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, field.label),
                label_style,
            )));
            lines.extend(value_lines(&field.input, focused));
        }
        lines.push(Line::from(Span::styled(
            "Tab next field • ←/→ pick • Ctrl+S submit • Esc cancel",
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let area = centered_rect(60, 60, area);
        let paragraph = Paragraph::new(Text::from(self.lines()))
            .block(
                Block::default()
                    .title(self.form.title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.focus_color)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

fn value_lines(input: &FieldInput, focused: bool) -> Vec<Line<'static>> {
    match input {
        FieldInput::Line(value) => {
            let cursor = if focused { "_" } else { "" };
            vec![Line::from(format!("  {}{}", value, cursor))]
        }
        FieldInput::Lines(area) => {
            let (row, col) = area.cursor();
            area.lines()
                .iter()
                .enumerate()
                .map(|(index, text)| {
                    if focused && index == row {
                        let split = text
                            .char_indices()
                            .nth(col)
                            .map(|(at, _)| at)
                            .unwrap_or(text.len());
                        Line::from(format!("  {}_{}", &text[..split], &text[split..]))
                    } else {
                        Line::from(format!("  {}", text))
                    }
                })
                .collect()
        }
        FieldInput::Choice { options, selected } => {
            let text = match options.get(*selected) {
                Some(choice) => format!("  < {} > ({}/{})", choice.label, selected + 1, options.len()),
                None => "  (none)".to_string(),
            };
            vec![Line::from(text)]
        }
    }
}
