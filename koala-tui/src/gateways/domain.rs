use crate::api_client::{ApiClientError, RestClient};
use koala_core::{Domain, DomainRequest, Envelope, Service};
use serde_json::Value;

pub mod endpoints {
    use crate::api_client::ApiClientError;
    use crate::gateways::Endpoint;
    use koala_core::{encode_segment, DomainRequest};

    pub(crate) fn collection(warehouse_id: &str) -> String {
        format!("/v1/warehouses/{}/domains", encode_segment(warehouse_id))
    }

    pub(crate) fn item(warehouse_id: &str, domain_id: &str) -> String {
        format!("{}/{}", collection(warehouse_id), encode_segment(domain_id))
    }

    pub fn list(warehouse_id: &str) -> Endpoint {
        Endpoint::get(collection(warehouse_id))
    }

    pub fn get(warehouse_id: &str, domain_id: &str) -> Endpoint {
        Endpoint::get(item(warehouse_id, domain_id))
    }

    pub fn create(warehouse_id: &str, request: &DomainRequest) -> Result<Endpoint, ApiClientError> {
        Endpoint::post(collection(warehouse_id)).with_json(request)
    }

    pub fn update(
        warehouse_id: &str,
        domain_id: &str,
        request: &DomainRequest,
    ) -> Result<Endpoint, ApiClientError> {
        Endpoint::put(item(warehouse_id, domain_id)).with_json(request)
    }

    pub fn delete(warehouse_id: &str, domain_id: &str) -> Endpoint {
        Endpoint::delete(item(warehouse_id, domain_id))
    }

    pub fn generate_doc(warehouse_id: &str, domain_id: &str) -> Endpoint {
        Endpoint::post(format!("{}/generate-doc", item(warehouse_id, domain_id)))
    }

    pub fn list_services(warehouse_id: &str, domain_id: &str) -> Endpoint {
        Endpoint::get(format!("{}/services", item(warehouse_id, domain_id)))
    }
}

/// Domains scoped to one warehouse.
pub struct DomainGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> DomainGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self, warehouse_id: &str) -> Result<Envelope<Vec<Domain>>, ApiClientError> {
        self.rest.send(&endpoints::list(warehouse_id)).await
    }

    pub async fn get(
        &self,
        warehouse_id: &str,
        domain_id: &str,
    ) -> Result<Envelope<Domain>, ApiClientError> {
        self.rest.send(&endpoints::get(warehouse_id, domain_id)).await
    }

    pub async fn create(
        &self,
        warehouse_id: &str,
        request: &DomainRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::create(warehouse_id, request)?)
            .await
    }

    pub async fn update(
        &self,
        warehouse_id: &str,
        domain_id: &str,
        request: &DomainRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::update(warehouse_id, domain_id, request)?)
            .await
    }

    pub async fn delete(
        &self,
        warehouse_id: &str,
        domain_id: &str,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::delete(warehouse_id, domain_id)).await
    }

    /// Start backend generation; completion is only visible on a later fetch.
    pub async fn generate_doc(
        &self,
        warehouse_id: &str,
        domain_id: &str,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::generate_doc(warehouse_id, domain_id))
            .await
    }

    pub async fn list_services(
        &self,
        warehouse_id: &str,
        domain_id: &str,
    ) -> Result<Envelope<Vec<Service>>, ApiClientError> {
        self.rest
            .send(&endpoints::list_services(warehouse_id, domain_id))
            .await
    }
}
