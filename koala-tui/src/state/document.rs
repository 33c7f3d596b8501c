use super::report_failure;
use crate::api_client::ApiClient;
use crate::messages;
use crate::notifications::Notifications;

/// `/document/:warehouseId/:path*`
#[derive(Debug, Clone)]
pub struct DocumentPage {
    pub warehouse_id: String,
    pub path: String,
    pub content: String,
    pub title: Option<String>,
    pub scroll: u16,
    pub loading: bool,
}

impl DocumentPage {
    pub fn new(warehouse_id: String, path: String) -> Self {
        Self {
            warehouse_id,
            path,
            content: String::new(),
            title: None,
            scroll: 0,
            loading: false,
        }
    }

    /// No request is made for an empty path.
    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        if self.path.is_empty() {
            return;
        }
        self.loading = true;
        match api.documents().get(&self.warehouse_id, &self.path).await {
            Ok(envelope) => {
                let doc = envelope.data_or_default();
                self.content = doc.content;
                self.title = doc.title;
            }
            Err(err) => report_failure(notes, messages::LOAD_FAILED, "document", &err),
        }
        self.loading = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}
