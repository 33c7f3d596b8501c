//! Warehouse-scoped domains and their services.

use crate::state::{App, DomainRow, DomainsPage};
use crate::theme::SynthBruteTheme;
use crate::views::helpers::two_column;
use crate::widgets::DetailPanel;
use koala_core::{Domain, Service};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, page: &DomainsPage, area: Rect) {
    let (list_area, detail_area) = two_column(area, 55);
    let rows = page.rows();
    let title = format!("Domains | {}", page.warehouse_id);
    render_rows(
        f,
        &app.theme,
        list_area,
        &title,
        &page.domains,
        &rows,
        page.cursor,
        page.generating.as_deref(),
        &|_| None,
    );

    let mut detail = DetailPanel::new("Details", Style::default().fg(app.theme.secondary));
    if let Some((_, service)) = page.selected_service() {
        service_fields(&mut detail, service);
    } else if let Some(domain) = page.selected_domain() {
        domain_fields(&mut detail, domain);
    }
    detail.render(f, detail_area);
}

/// Domain rows with their services indented below.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_rows(
    f: &mut Frame<'_>,
    theme: &SynthBruteTheme,
    area: Rect,
    title: &str,
    domains: &[Domain],
    rows: &[DomainRow],
    cursor: usize,
    generating: Option<&str>,
    warehouse_of: &dyn Fn(&Service) -> Option<String>,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|row| match *row {
            DomainRow::Domain(d) => {
                let domain = domains.get(d)?;
                Some(ListItem::new(Line::from(vec![
                    Span::styled(
                        domain.name.clone(),
                        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" ({})", domain.code), Style::default().fg(theme.text_dim)),
                    doc_marker(domain.has_document(), generating == Some(domain.id.as_str()), theme),
                ])))
            }
            DomainRow::Service(d, s) => {
                let service = domains.get(d)?.services.get(s)?;
                Some(ListItem::new(service_line(
                    service,
                    warehouse_of(service),
                    generating == Some(service.id.as_str()),
                    theme,
                )))
            }
        })
        .collect();

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(cursor.min(rows.len() - 1)));
    }
    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(Style::default().bg(theme.bg_highlight));
    f.render_stateful_widget(list, area, &mut state);
}

/// One indented service row, with the owning warehouse when known.
pub(crate) fn service_line(
    service: &Service,
    warehouse: Option<String>,
    generating: bool,
    theme: &SynthBruteTheme,
) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!("  └ {} ", service.service_name)),
        Span::styled(
            format!("({})", service.service_id),
            Style::default().fg(theme.text_dim),
        ),
    ];
    if let Some(warehouse) = warehouse {
        spans.push(Span::styled(
            format!(" @ {}", warehouse),
            Style::default().fg(theme.tertiary),
        ));
    }
    spans.push(doc_marker(service.has_document(), generating, theme));
    Line::from(spans)
}

fn doc_marker(has_document: bool, generating: bool, theme: &SynthBruteTheme) -> Span<'static> {
    if generating {
        Span::styled(" [generating]", Style::default().fg(theme.warning))
    } else if has_document {
        Span::styled(" [doc]", Style::default().fg(theme.success))
    } else {
        Span::raw("")
    }
}

pub(crate) fn domain_fields<'a>(detail: &mut DetailPanel<'a>, domain: &Domain) {
    detail.push("Domain", domain.name.clone());
    detail.push("Code", domain.code.clone());
    detail.push_opt("Description", domain.description.as_deref());
    detail.push("Services", domain.services.len().to_string());
    detail.push("Document", yes_no(domain.has_document()));
}

pub(crate) fn service_fields<'a>(detail: &mut DetailPanel<'a>, service: &Service) {
    detail.push("Service", service.service_name.clone());
    detail.push("Service ID", service.service_id.clone());
    detail.push_opt("Description", service.description.as_deref());
    detail.push("Source globs", service.source_globs.join(", "));
    detail.push("Document", yes_no(service.has_document()));
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
