//! Agent list view.

use crate::state::{position_of, AgentsPage, App};
use crate::theme::agent_status_color;
use crate::views::helpers::two_column;
use crate::widgets::{DetailPanel, StatusBadge};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, page: &AgentsPage, area: Rect) {
    let (list_area, detail_area) = two_column(area, 60);

    let items: Vec<ListItem> = page
        .agents
        .iter()
        .map(|agent| {
            let color = agent_status_color(&agent.status, &app.theme);
            ListItem::new(Line::from(vec![
                StatusBadge::new(agent.status.as_str(), color).span(),
                Span::raw(format!(" {} ({})", agent.name, agent.agent_type)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(position_of(&page.agents, &page.selected));
    let list = List::new(items)
        .block(Block::default().title("Agents").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut detail = DetailPanel::new("Details", Style::default().fg(app.theme.secondary));
    if let Some(agent) = page.selected_agent() {
        detail.push("Agent ID", agent.id.clone());
        detail.push("Name", agent.name.clone());
        detail.push("Type", agent.agent_type.clone());
        detail.push("Status", agent.status.to_string());
        detail.push_opt("Description", agent.description.as_deref());
    }
    detail.render(f, detail_area);
}
