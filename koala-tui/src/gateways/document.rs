use crate::api_client::{ApiClientError, RestClient};
use koala_core::{CatalogNode, DocumentContent, Envelope};

pub mod endpoints {
    use crate::gateways::Endpoint;
    use koala_core::{encode_multi_segment, encode_segment};

    /// `path` keeps its slashes; each segment is escaped on its own.
    pub fn get(warehouse_id: &str, path: &str) -> Endpoint {
        Endpoint::get(format!(
            "/v1/warehouses/{}/documents/{}",
            encode_segment(warehouse_id),
            encode_multi_segment(path)
        ))
    }

    pub fn catalog(warehouse_id: &str) -> Endpoint {
        Endpoint::get(format!(
            "/v1/warehouses/{}/catalog",
            encode_segment(warehouse_id)
        ))
    }
}

pub struct DocumentGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> DocumentGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn get(
        &self,
        warehouse_id: &str,
        path: &str,
    ) -> Result<Envelope<DocumentContent>, ApiClientError> {
        self.rest.send(&endpoints::get(warehouse_id, path)).await
    }

    pub async fn catalog(
        &self,
        warehouse_id: &str,
    ) -> Result<Envelope<Vec<CatalogNode>>, ApiClientError> {
        self.rest.send(&endpoints::catalog(warehouse_id)).await
    }
}
