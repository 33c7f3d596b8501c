//! Warehouse-scoped domain and service management.

use super::{
    attach_services, report_failure, step_cursor, Confirmation, ConfirmPrompt, DocumentOverlay,
    PendingAction,
};
use crate::api_client::ApiClient;
use crate::forms::{any_blank, Form};
use crate::messages;
use crate::notifications::Notifications;
use futures_util::future::try_join_all;
use koala_core::{
    join_source_globs, normalize_source_globs, CreateServiceRequest, Domain, DomainRequest,
    Service, UpdateServiceRequest,
};

/// A visible line: a domain, or one of its services (by index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRow {
    Domain(usize),
    Service(usize, usize),
}

#[derive(Debug, Clone)]
pub enum DomainDialog {
    CreateDomain(Form),
    EditDomain {
        domain_id: String,
        form: Form,
    },
    CreateService {
        domain_id: String,
        form: Form,
    },
    EditService {
        domain_id: String,
        service_id: String,
        form: Form,
    },
    Document(DocumentOverlay),
}

/// `/repository/:id/domains`
#[derive(Debug, Clone)]
pub struct DomainsPage {
    pub warehouse_id: String,
    pub domains: Vec<Domain>,
    pub cursor: usize,
    pub loading: bool,
    /// Id of the domain or service whose document is being generated.
    pub generating: Option<String>,
    pub dialog: Option<DomainDialog>,
}

pub(crate) fn domain_form(title: &str, name: &str, code: &str, description: &str) -> Form {
    Form::new(title)
        .required("name", "Name", name)
        .field("code", "Code", code)
        .field("description", "Description", description)
}

pub(crate) fn domain_request(form: &Form) -> DomainRequest {
    DomainRequest {
        name: form.value("name").trim().to_string(),
        description: form.value("description").to_string(),
        code: form.value("code").trim().to_string(),
    }
}

/// Flatten domains and their services into display rows.
pub(crate) fn domain_rows(domains: &[Domain]) -> Vec<DomainRow> {
    let mut rows = Vec::new();
    for (d, domain) in domains.iter().enumerate() {
        rows.push(DomainRow::Domain(d));
        rows.extend((0..domain.services.len()).map(|s| DomainRow::Service(d, s)));
    }
    rows
}

impl DomainsPage {
    pub fn new(warehouse_id: String) -> Self {
        Self {
            warehouse_id,
            domains: Vec::new(),
            cursor: 0,
            loading: false,
            generating: None,
            dialog: None,
        }
    }

    /// List the domains, then fetch every domain's detail concurrently to
    /// attach its services. Any failed fetch fails the whole load and the
    /// previous list stays on screen.
    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        self.loading = true;
        match self.fetch(api).await {
            Ok(domains) => {
                self.domains = domains;
                self.cursor = self.cursor.min(self.rows().len().saturating_sub(1));
            }
            Err(err) => {
                report_failure(notes, messages::DOMAIN_LIST_LOAD_FAILED, "domain list", &err)
            }
        }
        self.loading = false;
    }

    async fn fetch(&self, api: &ApiClient) -> Result<Vec<Domain>, crate::api_client::ApiClientError> {
        let gateway = api.domains();
        let mut domains = gateway.list(&self.warehouse_id).await?.data_or_default();
        if domains.is_empty() {
            return Ok(domains);
        }
        let details = try_join_all(
            domains
                .iter()
                .map(|domain| gateway.get(&self.warehouse_id, &domain.id)),
        )
        .await?;
        tracing::debug!(count = details.len(), "attached domain services");
        attach_services(&mut domains, details);
        Ok(domains)
    }

    pub fn rows(&self) -> Vec<DomainRow> {
        domain_rows(&self.domains)
    }

    pub fn selected_row(&self) -> Option<DomainRow> {
        self.rows().get(self.cursor).copied()
    }

    pub fn selected_domain(&self) -> Option<&Domain> {
        match self.selected_row()? {
            DomainRow::Domain(d) | DomainRow::Service(d, _) => self.domains.get(d),
        }
    }

    pub fn selected_service(&self) -> Option<(&Domain, &Service)> {
        match self.selected_row()? {
            DomainRow::Service(d, s) => {
                let domain = self.domains.get(d)?;
                Some((domain, domain.services.get(s)?))
            }
            DomainRow::Domain(_) => None,
        }
    }

    pub fn select_next(&mut self) {
        self.cursor = step_cursor(self.cursor, self.rows().len(), true);
    }

    pub fn select_previous(&mut self) {
        self.cursor = step_cursor(self.cursor, self.rows().len(), false);
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self.dialog.as_mut()? {
            DomainDialog::CreateDomain(form)
            | DomainDialog::EditDomain { form, .. }
            | DomainDialog::CreateService { form, .. }
            | DomainDialog::EditService { form, .. } => Some(form),
            DomainDialog::Document(_) => None,
        }
    }

    pub fn overlay_mut(&mut self) -> Option<&mut DocumentOverlay> {
        match self.dialog.as_mut()? {
            DomainDialog::Document(overlay) => Some(overlay),
            _ => None,
        }
    }

    pub fn open_create_domain(&mut self) {
        self.dialog = Some(DomainDialog::CreateDomain(domain_form("New domain", "", "", "")));
    }

    /// Edit the selected row: a domain row edits the domain, a service row
    /// edits the service.
    pub fn open_edit(&mut self) {
        if let Some((domain, service)) = self.selected_service() {
            let form = Form::new("Edit service")
                .required("serviceName", "Service name", service.service_name.clone())
                .field(
                    "description",
                    "Description",
                    service.description.clone().unwrap_or_default(),
                )
                .multiline("sourceGlobs", "Source globs", join_source_globs(&service.source_globs));
            self.dialog = Some(DomainDialog::EditService {
                domain_id: domain.id.clone(),
                service_id: service.id.clone(),
                form,
            });
            return;
        }
        if let Some(domain) = self.selected_domain() {
            let form = domain_form(
                "Edit domain",
                &domain.name,
                &domain.code,
                domain.description.as_deref().unwrap_or_default(),
            );
            self.dialog = Some(DomainDialog::EditDomain {
                domain_id: domain.id.clone(),
                form,
            });
        }
    }

    pub fn open_add_service(&mut self) {
        let Some(domain) = self.selected_domain() else {
            return;
        };
        let form = Form::new("Add service")
            .required("serviceId", "Service id", "")
            .required("serviceName", "Service name", "")
            .field("description", "Description", "")
            .multiline("sourceGlobs", "Source globs", "");
        self.dialog = Some(DomainDialog::CreateService {
            domain_id: domain.id.clone(),
            form,
        });
    }

    /// Show the generated document of the selected domain or service.
    pub fn open_document(&mut self) {
        let overlay = if let Some((_, service)) = self.selected_service() {
            DocumentOverlay::new(
                messages::service_doc_title(&service.service_name),
                service.document_content.as_deref(),
            )
        } else if let Some(domain) = self.selected_domain() {
            DocumentOverlay::new(
                messages::domain_doc_title(&domain.name),
                domain.document_content.as_deref(),
            )
        } else {
            return;
        };
        self.dialog = Some(DomainDialog::Document(overlay));
    }

    pub async fn submit_dialog(&mut self, api: &ApiClient, notes: &mut Notifications) {
        match self.dialog.clone() {
            Some(DomainDialog::CreateDomain(form)) => {
                self.create_domain(api, notes, domain_request(&form)).await
            }
            Some(DomainDialog::EditDomain { domain_id, form }) => {
                self.update_domain(api, notes, &domain_id, domain_request(&form))
                    .await
            }
            Some(DomainDialog::CreateService { domain_id, form }) => {
                let request = CreateServiceRequest {
                    service_id: form.value("serviceId").trim().to_string(),
                    service_name: form.value("serviceName").trim().to_string(),
                    description: form.value("description").to_string(),
                    source_globs: normalize_source_globs(&form.value("sourceGlobs")),
                };
                self.create_service(api, notes, &domain_id, request).await
            }
            Some(DomainDialog::EditService {
                domain_id,
                service_id,
                form,
            }) => {
                let request = UpdateServiceRequest {
                    service_name: form.value("serviceName").trim().to_string(),
                    description: form.value("description").to_string(),
                    source_globs: normalize_source_globs(&form.value("sourceGlobs")),
                };
                self.update_service(api, notes, &domain_id, &service_id, request)
                    .await
            }
            Some(DomainDialog::Document(_)) | None => {}
        }
    }

    pub async fn create_domain(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        request: DomainRequest,
    ) {
        if any_blank(&[request.name.as_str()]) {
            notes.warning(messages::DOMAIN_NAME_REQUIRED);
            return;
        }
        match api.domains().create(&self.warehouse_id, &request).await {
            Ok(_) => {
                notes.success(messages::CREATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::CREATE_FAILED, "domain create", &err),
        }
    }

    pub async fn update_domain(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        request: DomainRequest,
    ) {
        if any_blank(&[request.name.as_str()]) {
            notes.warning(messages::DOMAIN_NAME_REQUIRED);
            return;
        }
        match api
            .domains()
            .update(&self.warehouse_id, domain_id, &request)
            .await
        {
            Ok(_) => {
                notes.success(messages::UPDATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::UPDATE_FAILED, "domain update", &err),
        }
    }

    pub fn delete_prompt(&self) -> Option<ConfirmPrompt> {
        if let Some((domain, service)) = self.selected_service() {
            return Some(ConfirmPrompt {
                message: messages::CONFIRM_DELETE_SERVICE,
                action: PendingAction::DeleteService {
                    domain_id: domain.id.clone(),
                    service_id: service.id.clone(),
                },
            });
        }
        let domain = self.selected_domain()?;
        Some(ConfirmPrompt {
            message: messages::CONFIRM_DELETE_DOMAIN,
            action: PendingAction::DeleteDomain {
                domain_id: domain.id.clone(),
            },
        })
    }

    pub async fn delete_domain(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        confirmation: Confirmation,
    ) {
        if confirmation == Confirmation::Dismissed {
            return;
        }
        match api.domains().delete(&self.warehouse_id, domain_id).await {
            Ok(_) => {
                notes.success(messages::DELETED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::DELETE_FAILED, "domain delete", &err),
        }
    }

    pub async fn generate_domain_doc(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
    ) {
        self.generating = Some(domain_id.to_string());
        match api
            .domains()
            .generate_doc(&self.warehouse_id, domain_id)
            .await
        {
            Ok(_) => {
                notes.success(messages::DOMAIN_DOC_GENERATED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::GENERATE_FAILED, "domain doc", &err),
        }
        self.generating = None;
    }

    pub async fn create_service(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        request: CreateServiceRequest,
    ) {
        if any_blank(&[request.service_id.as_str(), request.service_name.as_str()]) {
            notes.warning(messages::REQUIRED_FIELDS);
            return;
        }
        match api
            .services()
            .create(&self.warehouse_id, domain_id, &request)
            .await
        {
            Ok(_) => {
                notes.success(messages::CREATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::CREATE_FAILED, "service create", &err),
        }
    }

    pub async fn update_service(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        service_id: &str,
        request: UpdateServiceRequest,
    ) {
        if any_blank(&[request.service_name.as_str()]) {
            notes.warning(messages::REQUIRED_FIELDS);
            return;
        }
        match api
            .services()
            .update(&self.warehouse_id, domain_id, service_id, &request)
            .await
        {
            Ok(_) => {
                notes.success(messages::UPDATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::UPDATE_FAILED, "service update", &err),
        }
    }

    pub async fn delete_service(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        service_id: &str,
        confirmation: Confirmation,
    ) {
        if confirmation == Confirmation::Dismissed {
            return;
        }
        match api
            .services()
            .delete(&self.warehouse_id, domain_id, service_id)
            .await
        {
            Ok(_) => {
                notes.success(messages::DELETED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::DELETE_FAILED, "service delete", &err),
        }
    }

    pub async fn generate_service_doc(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        service_id: &str,
    ) {
        self.generating = Some(service_id.to_string());
        match api
            .services()
            .generate_doc(&self.warehouse_id, domain_id, service_id)
            .await
        {
            Ok(_) => {
                notes.success(messages::SERVICE_DOC_GENERATED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::GENERATE_FAILED, "service doc", &err),
        }
        self.generating = None;
    }

    /// Flag the selected row as generating. False when nothing is selected.
    pub fn begin_generate(&mut self) -> bool {
        self.generating = match self.selected_service() {
            Some((_, service)) => Some(service.id.clone()),
            None => self.selected_domain().map(|domain| domain.id.clone()),
        };
        self.generating.is_some()
    }

    /// Generate the document of whatever row is selected.
    pub async fn generate_selected(&mut self, api: &ApiClient, notes: &mut Notifications) {
        if let Some((domain, service)) = self.selected_service() {
            let (domain_id, service_id) = (domain.id.clone(), service.id.clone());
            self.generate_service_doc(api, notes, &domain_id, &service_id)
                .await;
        } else if let Some(domain) = self.selected_domain() {
            let domain_id = domain.id.clone();
            self.generate_domain_doc(api, notes, &domain_id).await;
        }
    }
}
