//! Line-oriented Markdown styling for document panes.
//!
//! Headings, fenced code, list bullets, quotes and inline `code` get their
//! own colors. Everything else is shown as plain text.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct MarkdownRenderer {
    pub heading_color: Color,
    pub code_color: Color,
    pub bullet_color: Color,
    pub quote_color: Color,
    pub text_color: Color,
}

impl MarkdownRenderer {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, title: &str, content: &str, scroll: u16) {
        let paragraph = Paragraph::new(self.highlight(content))
            .block(Block::default().title(title.to_string()).borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(paragraph, area);
    }

    pub fn highlight(&self, content: &str) -> Text<'static> {
        let mut lines = Vec::new();
        let mut in_fence = false;

        for raw in content.lines() {
            let trimmed = raw.trim_start();
            if trimmed.starts_with("```") {
                in_fence = !in_fence;
                lines.push(Line::from(Span::styled(
                    raw.to_string(),
                    Style::default().fg(self.code_color).add_modifier(Modifier::DIM),
                )));
                continue;
            }
            if in_fence {
                lines.push(Line::from(Span::styled(
                    raw.to_string(),
                    Style::default().fg(self.code_color),
                )));
                continue;
            }
            lines.push(self.block_line(raw, trimmed));
        }

        Text::from(lines)
    }

    fn block_line(&self, raw: &str, trimmed: &str) -> Line<'static> {
        if let Some(level) = heading_level(trimmed) {
            let modifier = if level == 1 {
                Modifier::BOLD | Modifier::UNDERLINED
            } else {
                Modifier::BOLD
            };
            return Line::from(Span::styled(
                trimmed.to_string(),
                Style::default().fg(self.heading_color).add_modifier(modifier),
            ));
        }
        if trimmed.starts_with('>') {
            return Line::from(Span::styled(
                raw.to_string(),
                Style::default().fg(self.quote_color).add_modifier(Modifier::ITALIC),
            ));
        }
        if let Some(rest) = bullet_rest(trimmed) {
            let indent = &raw[..raw.len() - trimmed.len()];
            let marker = &trimmed[..trimmed.len() - rest.len()];
            let mut spans = vec![
                Span::raw(indent.to_string()),
                Span::styled(marker.to_string(), Style::default().fg(self.bullet_color)),
            ];
            spans.extend(self.inline(rest));
            return Line::from(spans);
        }
        Line::from(self.inline(raw))
    }

    /// Split on backticks; odd segments are inline code.
    fn inline(&self, text: &str) -> Vec<Span<'static>> {
        let plain = Style::default().fg(self.text_color);
        let code = Style::default().fg(self.code_color);
        if text.matches('`').count() < 2 {
            return vec![Span::styled(text.to_string(), plain)];
        }
        text.split('`')
            .enumerate()
            .filter(|(_, part)| !part.is_empty())
            .map(|(i, part)| {
                let style = if i % 2 == 1 { code } else { plain };
                Span::styled(part.to_string(), style)
            })
            .collect()
    }
}

fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&level) && line[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

/// Text after a `-`, `*`, `+` or `1.` list marker.
fn bullet_rest(line: &str) -> Option<&str> {
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest);
        }
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        return line[digits..].strip_prefix(". ");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer {
            heading_color: Color::Cyan,
            code_color: Color::Yellow,
            bullet_color: Color::Magenta,
            quote_color: Color::Gray,
            text_color: Color::White,
        }
    }

    #[test]
    fn test_heading_detection() {
        assert_eq!(heading_level("# Title"), Some(1));
        assert_eq!(heading_level("### Sub"), Some(3));
        assert_eq!(heading_level("#hashtag"), None);
        assert_eq!(heading_level("####### seven"), None);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(bullet_rest("- item"), Some("item"));
        assert_eq!(bullet_rest("12. twelfth"), Some("twelfth"));
        assert_eq!(bullet_rest("2024 was a year"), None);
        assert_eq!(bullet_rest("plain"), None);
    }

    #[test]
    fn test_fence_lines_use_code_color() {
        let text = renderer().highlight("```rust\n# not a heading\n```\n# Heading");
        assert_eq!(text.lines.len(), 4);
        assert_eq!(text.lines[1].spans[0].style.fg, Some(Color::Yellow));
        assert_eq!(text.lines[3].spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_inline_code_spans() {
        let spans = renderer().inline("run `cargo` now");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "cargo");
        assert_eq!(spans[1].style.fg, Some(Color::Yellow));
    }
}
