use super::report_failure;
use crate::api_client::ApiClient;
use crate::messages;
use crate::notifications::Notifications;
use koala_core::AiDocument;

/// `/ai-documents/:id`
#[derive(Debug, Clone)]
pub struct AiDocumentDetailPage {
    pub id: String,
    pub document: Option<AiDocument>,
    pub scroll: u16,
    pub loading: bool,
}

impl AiDocumentDetailPage {
    pub fn new(id: String) -> Self {
        Self {
            id,
            document: None,
            scroll: 0,
            loading: false,
        }
    }

    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        self.loading = true;
        match api.ai_documents().get(&self.id).await {
            Ok(envelope) => self.document = envelope.into_data(),
            Err(err) => report_failure(notes, messages::LOAD_FAILED, "ai document", &err),
        }
        self.loading = false;
    }

    pub fn content(&self) -> &str {
        self.document
            .as_ref()
            .map(|doc| doc.content.as_str())
            .unwrap_or_default()
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}
