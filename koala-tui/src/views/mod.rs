//! View rendering dispatch.

pub mod agents;
pub mod ai_document;
pub mod ai_documents;
pub mod document;
pub mod domains;
pub mod global_domains;
pub mod helpers;
pub mod home;
pub mod modal;
pub mod repository;
pub mod warehouses;

use crate::nav::Tab;
use crate::state::{App, Page};
use crate::theme::notification_color;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match &app.page {
        Page::Home => home::render(f, app, layout[1]),
        Page::Warehouses(page) => warehouses::render(f, app, page, layout[1]),
        Page::Agents(page) => agents::render(f, app, page, layout[1]),
        Page::Repository(page) => repository::render(f, app, page, layout[1]),
        Page::Domains(page) => domains::render(f, app, page, layout[1]),
        Page::AiDocuments(page) => ai_documents::render(f, app, page, layout[1]),
        Page::Document(page) => document::render(f, app, page, layout[1]),
        Page::AiDocument(page) => ai_document::render(f, app, page, layout[1]),
        Page::GlobalDomains(page) => global_domains::render(f, app, page, layout[1]),
    }

    render_footer(f, app, layout[2]);
    modal::render(f, app, f.size());
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all().iter().map(|tab| Line::from(tab.title())).collect();
    let mut title = format!("KoalaWiki | {}", app.route.to_path());
    if app.page.is_loading() {
        title.push_str(" | loading");
    }
    let tabs = Tabs::new(titles)
        .select(app.route.tab().index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(Style::default().fg(app.theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = match app.notifications.current(Utc::now()) {
        Some(note) => (
            note.message.clone(),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (
            key_help(&app.page).to_string(),
            Style::default().fg(app.theme.text_dim),
        ),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

pub fn key_help(page: &Page) -> &'static str {
    match page {
        Page::Home => "Enter warehouses • 1-4/Tab switch • q quit",
        Page::Warehouses(_) => {
            "Enter open • n add • s sync • S force sync • d delete • / search • [ ] page • m domains • i ai docs"
        }
        Page::Agents(_) => "j/k move • r refresh • Tab switch • q quit",
        Page::Repository(_) => "Enter open/expand • m domains • i ai docs • Esc back",
        Page::Domains(_) => {
            "n domain • a service • e edit • d delete • g generate • v view doc • Esc back"
        }
        Page::GlobalDomains(_) => {
            "n domain • a service • e edit • d delete • g generate • v view doc"
        }
        Page::AiDocuments(_) => "Enter open • j/k move • Esc back",
        Page::Document(_) | Page::AiDocument(_) => "j/k scroll • PgUp/PgDn page • Esc back",
    }
}
