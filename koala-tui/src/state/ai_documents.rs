use super::{position_of, report_failure, retain_selection};
use crate::api_client::ApiClient;
use crate::messages;
use crate::nav::Route;
use crate::notifications::Notifications;
use koala_core::AiDocument;

/// `/repository/:id/ai-documents`
#[derive(Debug, Clone)]
pub struct AiDocumentsPage {
    pub warehouse_id: String,
    pub documents: Vec<AiDocument>,
    pub selected: Option<String>,
    pub loading: bool,
}

impl AiDocumentsPage {
    pub fn new(warehouse_id: String) -> Self {
        Self {
            warehouse_id,
            documents: Vec::new(),
            selected: None,
            loading: false,
        }
    }

    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        self.loading = true;
        match api.ai_documents().list(&self.warehouse_id).await {
            Ok(envelope) => {
                self.documents = envelope.data_or_default().into_vec();
                retain_selection(&self.documents, &mut self.selected);
            }
            Err(err) => report_failure(notes, messages::LOAD_FAILED, "ai document list", &err),
        }
        self.loading = false;
    }

    pub fn selected_document(&self) -> Option<&AiDocument> {
        position_of(&self.documents, &self.selected).map(|index| &self.documents[index])
    }

    pub fn open_selected(&self) -> Option<Route> {
        self.selected_document()
            .map(|doc| Route::AiDocument { id: doc.id.clone() })
    }
}
