use crate::api_client::{ApiClientError, RestClient};
use koala_core::{CreateWarehouseRequest, Envelope, Warehouse, WarehousePage};
use serde_json::Value;

/// Pagination and filter of the warehouse list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseQuery {
    pub page: u32,
    pub page_size: u32,
    pub keyword: String,
}

impl Default for WarehouseQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            keyword: String::new(),
        }
    }
}

pub mod endpoints {
    use super::WarehouseQuery;
    use crate::api_client::ApiClientError;
    use crate::gateways::Endpoint;
    use koala_core::{encode_segment, CreateWarehouseRequest};

    pub fn list(query: &WarehouseQuery) -> Endpoint {
        Endpoint::get(format!(
            "/v1/warehouses?page={}&pageSize={}&keyword={}",
            query.page,
            query.page_size,
            encode_segment(&query.keyword)
        ))
    }

    pub fn get(id: &str) -> Endpoint {
        Endpoint::get(format!("/v1/warehouses/{}", encode_segment(id)))
    }

    pub fn create(request: &CreateWarehouseRequest) -> Result<Endpoint, ApiClientError> {
        Endpoint::post("/v1/warehouses").with_json(request)
    }

    pub fn delete(id: &str) -> Endpoint {
        Endpoint::delete(format!("/v1/warehouses/{}", encode_segment(id)))
    }

    pub fn sync(id: &str, force: bool) -> Endpoint {
        Endpoint::post(format!(
            "/v1/warehouses/{}/sync?forceSync={}",
            encode_segment(id),
            force
        ))
    }
}

pub struct WarehouseGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> WarehouseGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self, query: &WarehouseQuery) -> Result<Envelope<WarehousePage>, ApiClientError> {
        self.rest.send(&endpoints::list(query)).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Warehouse>, ApiClientError> {
        self.rest.send(&endpoints::get(id)).await
    }

    pub async fn create(
        &self,
        request: &CreateWarehouseRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::create(request)?).await
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::delete(id)).await
    }

    /// Trigger a regular sync (`forceSync=false`).
    pub async fn sync(&self, id: &str) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::sync(id, false)).await
    }

    pub async fn force_sync(&self, id: &str) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::sync(id, true)).await
    }
}
