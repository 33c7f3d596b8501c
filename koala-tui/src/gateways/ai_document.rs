use crate::api_client::{ApiClientError, RestClient};
use koala_core::{AiDocument, Envelope, ListPayload};

pub mod endpoints {
    use crate::gateways::Endpoint;
    use koala_core::encode_segment;

    pub fn list(warehouse_id: &str) -> Endpoint {
        Endpoint::get(format!(
            "/v1/warehouses/{}/ai-documents",
            encode_segment(warehouse_id)
        ))
    }

    pub fn get(id: &str) -> Endpoint {
        Endpoint::get(format!("/v1/ai-documents/{}", encode_segment(id)))
    }
}

pub struct AiDocumentGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> AiDocumentGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// The backend answers with either a bare array or a page object.
    pub async fn list(
        &self,
        warehouse_id: &str,
    ) -> Result<Envelope<ListPayload<AiDocument>>, ApiClientError> {
        self.rest.send(&endpoints::list(warehouse_id)).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<AiDocument>, ApiClientError> {
        self.rest.send(&endpoints::get(id)).await
    }
}
