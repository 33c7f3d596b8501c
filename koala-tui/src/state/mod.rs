//! Application state and per-page view models.
//!
//! Each page owns its data only while its route is active. Navigating builds a
//! fresh page and loads it; nothing survives across routes.

mod agents;
mod ai_document_detail;
mod ai_documents;
mod document;
mod domains;
mod global_domains;
mod repository;
mod warehouses;

pub use agents::AgentsPage;
pub use ai_document_detail::AiDocumentDetailPage;
pub use ai_documents::AiDocumentsPage;
pub use document::DocumentPage;
pub use domains::{DomainDialog, DomainRow, DomainsPage};
pub use global_domains::{GlobalDomainDialog, GlobalDomainsPage};
pub use repository::{CatalogRow, RepositoryPage};
pub use warehouses::{WarehouseDialog, WarehousesPage};

use crate::api_client::ApiClient;
use crate::config::TuiConfig;
use crate::forms::{Form, FormInput, FormOutcome};
use crate::nav::Route;
use crate::notifications::Notifications;
use crate::theme::SynthBruteTheme;
use koala_core::{Agent, AiDocument, Domain, Envelope, Warehouse};

/// Answer to a destructive-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Dismissed,
}

/// Deletion waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteWarehouse { id: String },
    DeleteDomain { domain_id: String },
    DeleteService { domain_id: String, service_id: String },
    DeleteGlobalDomain { domain_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: &'static str,
    pub action: PendingAction,
}

/// Read-only Markdown overlay opened from a domain or service row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOverlay {
    pub title: String,
    pub content: String,
    pub scroll: u16,
}

impl DocumentOverlay {
    pub fn new(title: String, content: Option<&str>) -> Self {
        Self {
            title,
            content: content.unwrap_or_default().to_string(),
            scroll: 0,
        }
    }
}

/// What currently owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Form,
    Overlay,
    Confirm,
}

pub enum Page {
    Home,
    Warehouses(WarehousesPage),
    Agents(AgentsPage),
    Repository(RepositoryPage),
    Domains(DomainsPage),
    AiDocuments(AiDocumentsPage),
    Document(DocumentPage),
    AiDocument(AiDocumentDetailPage),
    GlobalDomains(GlobalDomainsPage),
}

impl Page {
    pub fn for_route(route: &Route, config: &TuiConfig) -> Page {
        match route {
            Route::Home => Page::Home,
            Route::Warehouses => Page::Warehouses(WarehousesPage::new(config.page_size)),
            Route::Agents => Page::Agents(AgentsPage::new()),
            Route::Repository { id } => Page::Repository(RepositoryPage::new(id.clone())),
            Route::Domains { warehouse_id } => {
                Page::Domains(DomainsPage::new(warehouse_id.clone()))
            }
            Route::AiDocuments { warehouse_id } => {
                Page::AiDocuments(AiDocumentsPage::new(warehouse_id.clone()))
            }
            Route::Document { warehouse_id, path } => {
                Page::Document(DocumentPage::new(warehouse_id.clone(), path.clone()))
            }
            Route::AiDocument { id } => Page::AiDocument(AiDocumentDetailPage::new(id.clone())),
            Route::GlobalDomains => Page::GlobalDomains(GlobalDomainsPage::new()),
        }
    }

    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        match self {
            Page::Home => {}
            Page::Warehouses(page) => page.load(api, notes).await,
            Page::Agents(page) => page.load(api, notes).await,
            Page::Repository(page) => page.load(api, notes).await,
            Page::Domains(page) => page.load(api, notes).await,
            Page::AiDocuments(page) => page.load(api, notes).await,
            Page::Document(page) => page.load(api, notes).await,
            Page::AiDocument(page) => page.load(api, notes).await,
            Page::GlobalDomains(page) => page.load(api, notes).await,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Page::Home => false,
            Page::Warehouses(page) => page.loading,
            Page::Agents(page) => page.loading,
            Page::Repository(page) => page.loading,
            Page::Domains(page) => page.loading,
            Page::AiDocuments(page) => page.loading,
            Page::Document(page) => page.loading,
            Page::AiDocument(page) => page.loading,
            Page::GlobalDomains(page) => page.loading,
        }
    }

    /// Show the page as busy until [`Page::finish_busy`].
    pub fn mark_loading(&mut self) {
        match self {
            Page::Home => {}
            Page::Warehouses(page) => page.loading = true,
            Page::Agents(page) => page.loading = true,
            Page::Repository(page) => page.loading = true,
            Page::Domains(page) => page.loading = true,
            Page::AiDocuments(page) => page.loading = true,
            Page::Document(page) => page.loading = true,
            Page::AiDocument(page) => page.loading = true,
            Page::GlobalDomains(page) => page.loading = true,
        }
    }

    /// Clear every busy flag once the pending request has settled.
    pub fn finish_busy(&mut self) {
        match self {
            Page::Home => {}
            Page::Warehouses(page) => page.loading = false,
            Page::Agents(page) => page.loading = false,
            Page::Repository(page) => page.loading = false,
            Page::Domains(page) => {
                page.loading = false;
                page.generating = None;
            }
            Page::AiDocuments(page) => page.loading = false,
            Page::Document(page) => page.loading = false,
            Page::AiDocument(page) => page.loading = false,
            Page::GlobalDomains(page) => {
                page.loading = false;
                page.generating = None;
            }
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self {
            Page::Warehouses(page) => page.form_mut(),
            Page::Domains(page) => page.form_mut(),
            Page::GlobalDomains(page) => page.form_mut(),
            _ => None,
        }
    }

    pub fn overlay_mut(&mut self) -> Option<&mut DocumentOverlay> {
        match self {
            Page::Domains(page) => page.overlay_mut(),
            Page::GlobalDomains(page) => page.overlay_mut(),
            _ => None,
        }
    }

    pub fn close_dialog(&mut self) {
        match self {
            Page::Warehouses(page) => page.dialog = None,
            Page::Domains(page) => page.dialog = None,
            Page::GlobalDomains(page) => page.dialog = None,
            _ => {}
        }
    }

    pub async fn submit_dialog(&mut self, api: &ApiClient, notes: &mut Notifications) {
        match self {
            Page::Warehouses(page) => page.submit_dialog(api, notes).await,
            Page::Domains(page) => page.submit_dialog(api, notes).await,
            Page::GlobalDomains(page) => page.submit_dialog(api, notes).await,
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        match self {
            Page::Warehouses(page) => select_next_id(&page.warehouses, &mut page.selected),
            Page::Agents(page) => select_next_id(&page.agents, &mut page.selected),
            Page::AiDocuments(page) => select_next_id(&page.documents, &mut page.selected),
            Page::Repository(page) => page.select_next(),
            Page::Domains(page) => page.select_next(),
            Page::GlobalDomains(page) => page.select_next(),
            Page::Document(page) => page.scroll_down(1),
            Page::AiDocument(page) => page.scroll_down(1),
            Page::Home => {}
        }
    }

    pub fn select_previous(&mut self) {
        match self {
            Page::Warehouses(page) => select_prev_id(&page.warehouses, &mut page.selected),
            Page::Agents(page) => select_prev_id(&page.agents, &mut page.selected),
            Page::AiDocuments(page) => select_prev_id(&page.documents, &mut page.selected),
            Page::Repository(page) => page.select_previous(),
            Page::Domains(page) => page.select_previous(),
            Page::GlobalDomains(page) => page.select_previous(),
            Page::Document(page) => page.scroll_up(1),
            Page::AiDocument(page) => page.scroll_up(1),
            Page::Home => {}
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        match self {
            Page::Document(page) => page.scroll_down(lines),
            Page::AiDocument(page) => page.scroll_down(lines),
            _ => {}
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        match self {
            Page::Document(page) => page.scroll_up(lines),
            Page::AiDocument(page) => page.scroll_up(lines),
            _ => {}
        }
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SynthBruteTheme,
    pub api: ApiClient,
    pub route: Route,
    pub page: Page,
    pub history: Vec<Route>,
    pub notifications: Notifications,
    pub confirm: Option<ConfirmPrompt>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, api: ApiClient) -> Self {
        let page = Page::for_route(&Route::Home, &config);
        Self {
            config,
            theme: SynthBruteTheme::synthbrute(),
            api,
            route: Route::Home,
            page,
            history: Vec::new(),
            notifications: Notifications::new(),
            confirm: None,
            should_quit: false,
        }
    }

    pub fn input_mode(&mut self) -> InputMode {
        if self.confirm.is_some() {
            InputMode::Confirm
        } else if self.page.form_mut().is_some() {
            InputMode::Form
        } else if self.page.overlay_mut().is_some() {
            InputMode::Overlay
        } else {
            InputMode::Normal
        }
    }

    /// Switch to `route` with a fresh page marked as loading. The caller
    /// draws once and then awaits [`App::load_page`].
    pub fn navigate(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.route, route);
        if previous != self.route {
            self.history.push(previous);
        }
        self.enter_current();
    }

    /// Like [`App::navigate`] but without recording history.
    pub fn replace(&mut self, route: Route) {
        self.route = route;
        self.enter_current();
    }

    /// Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        let Some(route) = self.history.pop() else {
            return false;
        };
        self.route = route;
        self.enter_current();
        true
    }

    pub async fn load_page(&mut self) {
        self.page.load(&self.api, &mut self.notifications).await;
    }

    fn enter_current(&mut self) {
        tracing::debug!(route = %self.route, "entering route");
        self.confirm = None;
        self.page = Page::for_route(&self.route, &self.config);
        self.page.mark_loading();
    }

    pub fn request_confirmation(&mut self, prompt: ConfirmPrompt) {
        self.confirm = Some(prompt);
    }

    /// Resolve the open prompt. A dismissal is silent and touches nothing.
    pub async fn resolve_confirmation(&mut self, confirmation: Confirmation) {
        let Some(prompt) = self.confirm.take() else {
            return;
        };
        let api = &self.api;
        let notes = &mut self.notifications;
        match (&mut self.page, prompt.action) {
            (Page::Warehouses(page), PendingAction::DeleteWarehouse { id }) => {
                page.delete(api, notes, &id, confirmation).await
            }
            (Page::Domains(page), PendingAction::DeleteDomain { domain_id }) => {
                page.delete_domain(api, notes, &domain_id, confirmation).await
            }
            (
                Page::Domains(page),
                PendingAction::DeleteService {
                    domain_id,
                    service_id,
                },
            ) => {
                page.delete_service(api, notes, &domain_id, &service_id, confirmation)
                    .await
            }
            (Page::GlobalDomains(page), PendingAction::DeleteGlobalDomain { domain_id }) => {
                page.delete_domain(api, notes, &domain_id, confirmation).await
            }
            (_, action) => {
                tracing::warn!(?action, "confirmation does not match the active page");
            }
        }
    }

    /// Feed one keystroke to the open form. Returns true when the form asks
    /// to be submitted; a cancelled form is closed here.
    pub fn handle_form_input(&mut self, input: FormInput) -> bool {
        let outcome = match self.page.form_mut() {
            Some(form) => form.handle(input),
            None => return false,
        };
        match outcome {
            FormOutcome::Editing => false,
            FormOutcome::Cancel => {
                self.page.close_dialog();
                false
            }
            FormOutcome::Submit => true,
        }
    }

    pub async fn submit_form(&mut self) {
        self.page
            .submit_dialog(&self.api, &mut self.notifications)
            .await
    }
}

/// Log the failure detail; the user only sees the generic message.
pub(crate) fn report_failure(
    notes: &mut Notifications,
    message: &'static str,
    context: &str,
    err: &crate::api_client::ApiClientError,
) {
    tracing::warn!(context, error = %err, "{}", message);
    notes.error(message);
}

/// Copy the `services` of each detail response onto its list row.
///
/// Rows and details are matched positionally.
pub(crate) fn attach_services(domains: &mut [Domain], details: Vec<Envelope<Domain>>) {
    for (domain, detail) in domains.iter_mut().zip(details) {
        domain.services = detail
            .into_data()
            .map(|detail| detail.services)
            .unwrap_or_default();
    }
}

pub(crate) trait HasEntityId {
    fn entity_id(&self) -> &str;
}

impl HasEntityId for Warehouse {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl HasEntityId for Agent {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl HasEntityId for AiDocument {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

pub(crate) fn select_next_id<T: HasEntityId>(items: &[T], selected: &mut Option<String>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let next = match position_of(items, selected) {
        Some(index) => (index + 1) % items.len(),
        None => 0,
    };
    *selected = Some(items[next].entity_id().to_string());
}

pub(crate) fn select_prev_id<T: HasEntityId>(items: &[T], selected: &mut Option<String>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let index = position_of(items, selected).unwrap_or(0);
    let prev = if index == 0 { items.len() - 1 } else { index - 1 };
    *selected = Some(items[prev].entity_id().to_string());
}

/// Keep the selection if its row survived a reload, else select the first row.
pub(crate) fn retain_selection<T: HasEntityId>(items: &[T], selected: &mut Option<String>) {
    if position_of(items, selected).is_none() {
        *selected = items.first().map(|item| item.entity_id().to_string());
    }
}

pub(crate) fn position_of<T: HasEntityId>(items: &[T], selected: &Option<String>) -> Option<usize> {
    let id = selected.as_deref()?;
    items.iter().position(|item| item.entity_id() == id)
}

/// Move a row cursor within `len` rows, wrapping at both ends.
pub(crate) fn step_cursor(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let cursor = cursor.min(len - 1);
    if forward {
        (cursor + 1) % len
    } else if cursor == 0 {
        len - 1
    } else {
        cursor - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str) -> Agent {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    #[test]
    fn test_select_next_and_prev_wrap() {
        let agents = vec![agent("a"), agent("b"), agent("c")];
        let mut selected = None;
        select_next_id(&agents, &mut selected);
        assert_eq!(selected.as_deref(), Some("a"));
        select_prev_id(&agents, &mut selected);
        assert_eq!(selected.as_deref(), Some("c"));
        select_next_id(&agents, &mut selected);
        assert_eq!(selected.as_deref(), Some("a"));
    }

    #[test]
    fn test_selection_cleared_on_empty() {
        let mut selected = Some("gone".to_string());
        select_next_id::<Agent>(&[], &mut selected);
        assert!(selected.is_none());
    }

    #[test]
    fn test_retain_selection() {
        let agents = vec![agent("a"), agent("b")];
        let mut selected = Some("b".to_string());
        retain_selection(&agents, &mut selected);
        assert_eq!(selected.as_deref(), Some("b"));

        let mut stale = Some("z".to_string());
        retain_selection(&agents, &mut stale);
        assert_eq!(stale.as_deref(), Some("a"));
    }

    #[test]
    fn test_step_cursor() {
        assert_eq!(step_cursor(0, 3, true), 1);
        assert_eq!(step_cursor(2, 3, true), 0);
        assert_eq!(step_cursor(0, 3, false), 2);
        assert_eq!(step_cursor(9, 3, false), 1);
        assert_eq!(step_cursor(0, 0, true), 0);
    }

    #[test]
    fn test_attach_services_defaults_missing_detail() {
        let mut domains: Vec<Domain> = serde_json::from_value(serde_json::json!([
            {"id": "d1"}, {"id": "d2"}
        ]))
        .unwrap();
        let detail: Domain = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "services": [{"id": "s1", "serviceId": "svc"}]
        }))
        .unwrap();
        attach_services(&mut domains, vec![Envelope::with_data(detail), Envelope::empty()]);
        assert_eq!(domains[0].services.len(), 1);
        assert!(domains[1].services.is_empty());
    }
}
