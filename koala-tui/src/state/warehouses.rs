use super::{
    position_of, report_failure, retain_selection, Confirmation, ConfirmPrompt, PendingAction,
};
use crate::api_client::ApiClient;
use crate::forms::Form;
use crate::gateways::WarehouseQuery;
use crate::messages;
use crate::notifications::Notifications;
use koala_core::{CreateWarehouseRequest, Warehouse};

#[derive(Debug, Clone)]
pub enum WarehouseDialog {
    Create(Form),
    Search(Form),
}

/// `/warehouses`: paginated list with create, sync and delete.
#[derive(Debug, Clone)]
pub struct WarehousesPage {
    pub warehouses: Vec<Warehouse>,
    pub total: u64,
    pub query: WarehouseQuery,
    pub selected: Option<String>,
    pub loading: bool,
    pub dialog: Option<WarehouseDialog>,
}

impl WarehousesPage {
    pub fn new(page_size: u32) -> Self {
        Self {
            warehouses: Vec::new(),
            total: 0,
            query: WarehouseQuery {
                page_size,
                ..WarehouseQuery::default()
            },
            selected: None,
            loading: false,
            dialog: None,
        }
    }

    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        let query = self.query.clone();
        self.load_query(api, notes, query).await;
    }

    /// Fetch the list for `query`. The query only becomes current once the
    /// fetch succeeded, so a failed page turn leaves page, keyword and rows
    /// as they were.
    async fn load_query(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        query: WarehouseQuery,
    ) -> bool {
        self.loading = true;
        let loaded = match api.warehouses().list(&query).await {
            Ok(envelope) => {
                let page = envelope.data_or_default();
                self.warehouses = page.items;
                self.total = page.total;
                self.query = query;
                retain_selection(&self.warehouses, &mut self.selected);
                true
            }
            Err(err) => {
                report_failure(notes, messages::LOAD_FAILED, "warehouse list", &err);
                false
            }
        };
        self.loading = false;
        loaded
    }

    pub fn selected_warehouse(&self) -> Option<&Warehouse> {
        position_of(&self.warehouses, &self.selected).map(|index| &self.warehouses[index])
    }

    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.query.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn open_create(&mut self) {
        let form = Form::new("Add warehouse")
            .required("address", "Git address", "")
            .field("branch", "Branch", messages::DEFAULT_BRANCH);
        self.dialog = Some(WarehouseDialog::Create(form));
    }

    pub fn open_search(&mut self) {
        let form = Form::new("Search warehouses").field("keyword", "Keyword", self.query.keyword.clone());
        self.dialog = Some(WarehouseDialog::Search(form));
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self.dialog.as_mut()? {
            WarehouseDialog::Create(form) | WarehouseDialog::Search(form) => Some(form),
        }
    }

    pub async fn submit_dialog(&mut self, api: &ApiClient, notes: &mut Notifications) {
        match self.dialog.clone() {
            Some(WarehouseDialog::Create(form)) => {
                let request = CreateWarehouseRequest {
                    address: form.value("address").trim().to_string(),
                    branch: form.value("branch").trim().to_string(),
                };
                self.create(api, notes, request).await;
            }
            Some(WarehouseDialog::Search(form)) => {
                let keyword = form.value("keyword").trim().to_string();
                self.dialog = None;
                self.search(api, notes, keyword).await;
            }
            None => {}
        }
    }

    pub async fn create(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        mut request: CreateWarehouseRequest,
    ) {
        if request.address.trim().is_empty() {
            notes.warning(messages::ADDRESS_REQUIRED);
            return;
        }
        if request.branch.trim().is_empty() {
            request.branch = messages::DEFAULT_BRANCH.to_string();
        }
        match api.warehouses().create(&request).await {
            Ok(_) => {
                notes.success(messages::ADDED);
                self.dialog = None;
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::ADD_FAILED, "warehouse create", &err),
        }
    }

    pub async fn sync(&mut self, api: &ApiClient, notes: &mut Notifications, id: &str, force: bool) {
        let gateway = api.warehouses();
        let result = if force {
            gateway.force_sync(id).await
        } else {
            gateway.sync(id).await
        };
        match result {
            Ok(_) => {
                notes.success(if force {
                    messages::FORCE_SYNC_TRIGGERED
                } else {
                    messages::SYNC_TRIGGERED
                });
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::SYNC_FAILED, "warehouse sync", &err),
        }
    }

    pub fn delete_prompt(&self) -> Option<ConfirmPrompt> {
        let warehouse = self.selected_warehouse()?;
        Some(ConfirmPrompt {
            message: messages::CONFIRM_DELETE_WAREHOUSE,
            action: PendingAction::DeleteWarehouse {
                id: warehouse.id.clone(),
            },
        })
    }

    pub async fn delete(
        &mut self,
        api: &ApiClient,
        notes: &mut Notifications,
        id: &str,
        confirmation: Confirmation,
    ) {
        if confirmation == Confirmation::Dismissed {
            return;
        }
        match api.warehouses().delete(id).await {
            Ok(_) => {
                notes.success(messages::DELETED);
                self.load(api, notes).await;
            }
            Err(err) => report_failure(notes, messages::DELETE_FAILED, "warehouse delete", &err),
        }
    }

    pub async fn search(&mut self, api: &ApiClient, notes: &mut Notifications, keyword: String) -> bool {
        let query = WarehouseQuery {
            keyword,
            page: 1,
            ..self.query.clone()
        };
        self.load_query(api, notes, query).await
    }

    /// Returns false when already on the last page or the load failed.
    pub async fn next_page(&mut self, api: &ApiClient, notes: &mut Notifications) -> bool {
        if self.query.page >= self.total_pages() {
            return false;
        }
        let query = WarehouseQuery {
            page: self.query.page + 1,
            ..self.query.clone()
        };
        self.load_query(api, notes, query).await
    }

    pub async fn prev_page(&mut self, api: &ApiClient, notes: &mut Notifications) -> bool {
        if self.query.page <= 1 {
            return false;
        }
        let query = WarehouseQuery {
            page: self.query.page - 1,
            ..self.query.clone()
        };
        self.load_query(api, notes, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let mut page = WarehousesPage::new(10);
        assert_eq!(page.total_pages(), 1);
        page.total = 21;
        assert_eq!(page.total_pages(), 3);
        page.total = 20;
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_create_form_defaults_branch() {
        let mut page = WarehousesPage::new(10);
        page.open_create();
        let form = page.form_mut().unwrap();
        assert_eq!(form.value("branch"), "master");
        assert_eq!(form.value("address"), "");
    }

    #[test]
    fn test_delete_prompt_needs_selection() {
        let mut page = WarehousesPage::new(10);
        assert!(page.delete_prompt().is_none());
        page.warehouses = vec![serde_json::from_value(serde_json::json!({"id": "w1"})).unwrap()];
        page.selected = Some("w1".to_string());
        assert_eq!(
            page.delete_prompt().unwrap().action,
            PendingAction::DeleteWarehouse { id: "w1".to_string() }
        );
    }
}
