//! Dialogs drawn over the active page.

use crate::forms::Form;
use crate::state::{
    App, DocumentOverlay, DomainDialog, GlobalDomainDialog, Page, WarehouseDialog,
};
use crate::views::helpers::markdown;
use crate::widgets::{centered_rect, FormWidget};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(overlay) = active_overlay(&app.page) {
        let rect = centered_rect(80, 80, area);
        f.render_widget(Clear, rect);
        markdown(app).render(f, rect, &overlay.title, &overlay.content, overlay.scroll);
    }

    if let Some(form) = active_form(&app.page) {
        let widget = FormWidget {
            form,
            label_color: app.theme.text,
            focus_color: app.theme.primary,
        };
        widget.render(f, area);
    }

    if let Some(prompt) = &app.confirm {
        let rect = centered_rect(40, 20, area);
        let lines = vec![
            Line::from(Span::styled(
                prompt.message,
                Style::default()
                    .fg(app.theme.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("y confirm • n cancel"),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(paragraph, rect);
    }
}

pub fn active_form(page: &Page) -> Option<&Form> {
    match page {
        Page::Warehouses(page) => match page.dialog.as_ref()? {
            WarehouseDialog::Create(form) | WarehouseDialog::Search(form) => Some(form),
        },
        Page::Domains(page) => match page.dialog.as_ref()? {
            DomainDialog::CreateDomain(form)
            | DomainDialog::EditDomain { form, .. }
            | DomainDialog::CreateService { form, .. }
            | DomainDialog::EditService { form, .. } => Some(form),
            DomainDialog::Document(_) => None,
        },
        Page::GlobalDomains(page) => match page.dialog.as_ref()? {
            GlobalDomainDialog::CreateDomain(form)
            | GlobalDomainDialog::EditDomain { form, .. }
            | GlobalDomainDialog::CreateService { form, .. } => Some(form),
            GlobalDomainDialog::Document(_) => None,
        },
        _ => None,
    }
}

pub fn active_overlay(page: &Page) -> Option<&DocumentOverlay> {
    match page {
        Page::Domains(page) => match page.dialog.as_ref()? {
            DomainDialog::Document(overlay) => Some(overlay),
            _ => None,
        },
        Page::GlobalDomains(page) => match page.dialog.as_ref()? {
            GlobalDomainDialog::Document(overlay) => Some(overlay),
            _ => None,
        },
        _ => None,
    }
}
