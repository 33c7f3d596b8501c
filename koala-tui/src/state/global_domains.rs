//! Cross-warehouse domains.

use super::domains::{domain_form, domain_request, domain_rows};
use super::{
    attach_services, report_failure, step_cursor, Confirmation, ConfirmPrompt, DocumentOverlay,
    DomainRow, PendingAction,
};
use crate::api_client::{ApiClient, ApiClientError};
use crate::forms::{any_blank, Choice, Form};
use crate::messages;
use crate::notifications::Notifications;
use futures_util::future::try_join_all;
use koala_core::{
    normalize_source_globs, CreateGlobalServiceRequest, Domain, DomainRequest, Service,
    WarehouseRef,
};

#[derive(Debug, Clone)]
pub enum GlobalDomainDialog {
    CreateDomain(Form),
    EditDomain { domain_id: String, form: Form },
    CreateService { domain_id: String, form: Form },
    Document(DocumentOverlay),
}

/// `/domains`
#[derive(Debug, Clone, Default)]
pub struct GlobalDomainsPage {
    pub domains: Vec<Domain>,
    pub warehouses: Vec<WarehouseRef>,
    pub cursor: usize,
    pub loading: bool,
    pub generating: Option<String>,
    pub dialog: Option<GlobalDomainDialog>,
}

impl GlobalDomainsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Domain list and warehouse names are fetched together, then each
    /// domain's services. All of it succeeds or the page keeps its old data.
    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        self.loading = true;
        match fetch(api).await {
            Ok((domains, warehouses)) => {
                self.domains = domains;
                self.warehouses = warehouses;
                self.cursor = self.cursor.min(self.rows().len().saturating_sub(1));
            }
            Err(err) => report_failure(notes, messages::LOAD_FAILED, "global domain list", &err),
        }
        self.loading = false;
    }

    /// Display name of a warehouse, or the raw id when it cannot be resolved.
    pub fn warehouse_name<'a>(&'a self, warehouse_id: &'a str) -> &'a str {
        self.warehouses
            .iter()
            .find(|w| w.id == warehouse_id)
            .and_then(|w| w.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(warehouse_id)
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
            GlobalDomainDialog::CreateDomain(form)
            | GlobalDomainDialog::EditDomain { form, .. }
            | GlobalDomainDialog::CreateService { form, .. } => Some(form),
            GlobalDomainDialog::Document(_) => None,
        }
    }

    pub fn overlay_mut(&mut self) -> Option<&mut DocumentOverlay> {
        match self.dialog.as_mut()? {
            GlobalDomainDialog::Document(overlay) => Some(overlay),
            _ => None,
        }
    }

    pub fn open_create_domain(&mut self) {
        let form = domain_form("New global domain", "", "", "").require("code");
        self.dialog = Some(GlobalDomainDialog::CreateDomain(form));
    }

    pub fn open_edit(&mut self) {
        let Some(domain) = self.selected_domain() else {
            return;
        };
        let form = domain_form(
            "Edit global domain",
            &domain.name,
            &domain.code,
            domain.description.as_deref().unwrap_or_default(),
        )
        .require("code");
        self.dialog = Some(GlobalDomainDialog::EditDomain {
            domain_id: domain.id.clone(),
            form,
        });
    }

    /// Picker entries for the loaded warehouses: name and address, keyed by id.
    pub fn warehouse_choices(&self) -> Vec<Choice> {
        self.warehouses
            .iter()
            .map(|w| {
                let name = self.warehouse_name(&w.id);
                let label = match w.address.as_deref().filter(|a| !a.trim().is_empty()) {
                    Some(address) => format!("{} ({})", name, address),
                    None => name.to_string(),
                };
                Choice {
                    value: w.id.clone(),
                    label,
                }
            })
            .collect()
    }

    pub fn open_add_service(&mut self, notes: &mut Notifications) {
        let Some(domain) = self.selected_domain() else {
            return;
        };
        let choices = self.warehouse_choices();
        if choices.is_empty() {
            notes.info(messages::NO_WAREHOUSES);
            return;
        }
        let form = Form::new("Add service")
            .choice("warehouseId", "Warehouse", choices)
            .required("serviceId", "Service id", "")
            .required("serviceName", "Service name", "")
            .field("description", "Description", "")
            .multiline("sourceGlobs", "Source globs", "");
        self.dialog = Some(GlobalDomainDialog::CreateService {
            domain_id: domain.id.clone(),
            form,
        });
    }

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
        self.dialog = Some(GlobalDomainDialog::Document(overlay));
    }

    pub async fn submit_dialog(&mut self, api: &ApiClient, notes: &mut Notifications) {
        match self.dialog.clone() {
            Some(GlobalDomainDialog::CreateDomain(form)) => {
                self.create_domain(api, notes, domain_request(&form)).await
            }
            Some(GlobalDomainDialog::EditDomain { domain_id, form }) => {
                self.update_domain(api, notes, &domain_id, domain_request(&form))
                    .await
            }
            Some(GlobalDomainDialog::CreateService { domain_id, form }) => {
                let request = CreateGlobalServiceRequest {
                    warehouse_id: form.value("warehouseId").trim().to_string(),
                    service_id: form.value("serviceId").trim().to_string(),
                    service_name: form.value("serviceName").trim().to_string(),
                    description: form.value("description").to_string(),
                    source_globs: normalize_source_globs(&form.value("sourceGlobs")),
                };
                self.create_service(api, notes, &domain_id, request).await
            }
            Some(GlobalDomainDialog::Document(_)) | None => {}
        }
    }

    pub async fn create_domain(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        request: DomainRequest,
    ) {
        if any_blank(&[request.name.as_str(), request.code.as_str()]) {
            notes.warning(messages::NAME_AND_CODE_REQUIRED);
            return;
        }
        match api.global_domains().create(&request).await {
            Ok(_) => {
                notes.success(messages::CREATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::CREATE_FAILED, "global domain create", &err),
        }
    }

    pub async fn update_domain(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        request: DomainRequest,
    ) {
        if any_blank(&[request.name.as_str(), request.code.as_str()]) {
            notes.warning(messages::NAME_AND_CODE_REQUIRED);
            return;
        }
        match api.global_domains().update(domain_id, &request).await {
            Ok(_) => {
                notes.success(messages::UPDATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::UPDATE_FAILED, "global domain update", &err),
        }
    }

    pub fn delete_prompt(&self) -> Option<ConfirmPrompt> {
        let domain = self.selected_domain()?;
        Some(ConfirmPrompt {
            message: messages::CONFIRM_DELETE_DOMAIN,
            action: PendingAction::DeleteGlobalDomain {
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
        match api.global_domains().delete(domain_id).await {
            Ok(_) => {
                notes.success(messages::DELETED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::DELETE_FAILED, "global domain delete", &err),
        }
    }

    pub async fn generate_domain_doc(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
    ) {
        self.generating = Some(domain_id.to_string());
        match api.global_domains().generate_doc(domain_id).await {
            Ok(_) => {
                notes.success(messages::DOMAIN_DOC_GENERATED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::GENERATE_FAILED, "global domain doc", &err),
        }
        self.generating = None;
    }

    pub async fn create_service(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        domain_id: &str,
        request: CreateGlobalServiceRequest,
    ) {
        if any_blank(&[
            request.warehouse_id.as_str(),
            request.service_id.as_str(),
            request.service_name.as_str(),
        ]) {
            notes.warning(messages::REQUIRED_FIELDS);
            return;
        }
        match api.global_domains().create_service(domain_id, &request).await {
            Ok(_) => {
                notes.success(messages::CREATED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::CREATE_FAILED, "global service create", &err),
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
            .global_domains()
            .generate_service_doc(domain_id, service_id)
            .await
        {
            Ok(_) => {
                notes.success(messages::SERVICE_DOC_GENERATED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::GENERATE_FAILED, "global service doc", &err),
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

async fn fetch(api: &ApiClient) -> Result<(Vec<Domain>, Vec<WarehouseRef>), ApiClientError> {
    let gateway = api.global_domains();
    let (domains, warehouses) = tokio::try_join!(gateway.list(), gateway.list_warehouses())?;
    let mut domains = domains.data_or_default();
    let warehouses = warehouses.data_or_default();
    if !domains.is_empty() {
        let details =
            try_join_all(domains.iter().map(|domain| gateway.get(&domain.id))).await?;
        attach_services(&mut domains, details);
    }
    Ok((domains, warehouses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_name_fallback() {
        let mut page = GlobalDomainsPage::new();
        page.warehouses = serde_json::from_value(serde_json::json!([
            {"id": "w1", "name": "koala"},
            {"id": "w2"}
        ]))
        .unwrap();
        assert_eq!(page.warehouse_name("w1"), "koala");
        assert_eq!(page.warehouse_name("w2"), "w2");
        assert_eq!(page.warehouse_name("w9"), "w9");
    }

    #[test]
    fn test_create_form_requires_code() {
        let mut page = GlobalDomainsPage::new();
        page.open_create_domain();
        let form = page.form_mut().unwrap();
        assert!(form.fields.iter().all(|f| f.key == "description" || f.required));
    }

    fn with_domain_and_warehouses() -> GlobalDomainsPage {
        let mut page = GlobalDomainsPage::new();
        page.domains = serde_json::from_value(serde_json::json!([
            {"id": "g1", "name": "Billing", "code": "billing",
             "services": [{"id": "s1", "serviceId": "pay", "serviceName": "Pay", "warehouseId": "w2"}]}
        ]))
        .unwrap();
        page.warehouses = serde_json::from_value(serde_json::json!([
            {"id": "w1", "name": "koala", "address": "https://git/koala.git"},
            {"id": "w2", "name": "  ", "address": null}
        ]))
        .unwrap();
        page
    }

    #[test]
    fn test_edit_form_requires_code() {
        let mut page = with_domain_and_warehouses();
        page.open_edit();
        let form = page.form_mut().unwrap();
        assert_eq!(form.value("code"), "billing");
        assert!(form.fields.iter().all(|f| f.key == "description" || f.required));
    }

    #[test]
    fn test_add_service_needs_domain() {
        let mut page = GlobalDomainsPage::new();
        let mut notes = Notifications::new();
        page.open_add_service(&mut notes);
        assert!(page.dialog.is_none());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_add_service_without_warehouses_informs() {
        let mut page = with_domain_and_warehouses();
        page.warehouses.clear();
        let mut notes = Notifications::new();
        page.open_add_service(&mut notes);
        assert!(page.dialog.is_none());
        assert_eq!(notes.latest().unwrap().message, messages::NO_WAREHOUSES);
    }

    #[test]
    fn test_add_service_picks_warehouse() {
        let mut page = with_domain_and_warehouses();
        let mut notes = Notifications::new();
        page.open_add_service(&mut notes);
        let form = page.form_mut().unwrap();
        match &form.fields[0].input {
            crate::forms::FieldInput::Choice { options, .. } => {
                assert_eq!(options[0].label, "koala (https://git/koala.git)");
                assert_eq!(options[1].label, "w2");
            }
            other => panic!("unexpected input {:?}", other),
        }
        assert_eq!(form.value("warehouseId"), "w1");
        form.handle(crate::forms::FormInput::Right);
        assert_eq!(form.value("warehouseId"), "w2");
    }

    #[test]
    fn test_begin_generate_flags_selected_row() {
        let mut page = with_domain_and_warehouses();
        assert!(page.begin_generate());
        assert_eq!(page.generating.as_deref(), Some("g1"));
        page.cursor = 1;
        assert!(page.begin_generate());
        assert_eq!(page.generating.as_deref(), Some("s1"));

        let mut empty = GlobalDomainsPage::new();
        assert!(!empty.begin_generate());
    }
}
