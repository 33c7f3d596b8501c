use crate::api_client::{ApiClientError, RestClient};
use koala_core::{CreateServiceRequest, Envelope, UpdateServiceRequest};
use serde_json::Value;

pub mod endpoints {
    use crate::api_client::ApiClientError;
    use crate::gateways::domain::endpoints::item as domain_item;
    use crate::gateways::Endpoint;
    use koala_core::{encode_segment, CreateServiceRequest, UpdateServiceRequest};

    fn collection(warehouse_id: &str, domain_id: &str) -> String {
        format!("{}/services", domain_item(warehouse_id, domain_id))
    }

    fn item(warehouse_id: &str, domain_id: &str, service_id: &str) -> String {
        format!(
            "{}/{}",
            collection(warehouse_id, domain_id),
            encode_segment(service_id)
        )
    }

    pub fn create(
        warehouse_id: &str,
        domain_id: &str,
        request: &CreateServiceRequest,
    ) -> Result<Endpoint, ApiClientError> {
        Endpoint::post(collection(warehouse_id, domain_id)).with_json(request)
    }

    pub fn update(
        warehouse_id: &str,
        domain_id: &str,
        service_id: &str,
        request: &UpdateServiceRequest,
    ) -> Result<Endpoint, ApiClientError> {
        Endpoint::put(item(warehouse_id, domain_id, service_id)).with_json(request)
    }

    pub fn delete(warehouse_id: &str, domain_id: &str, service_id: &str) -> Endpoint {
        Endpoint::delete(item(warehouse_id, domain_id, service_id))
    }

    pub fn generate_doc(warehouse_id: &str, domain_id: &str, service_id: &str) -> Endpoint {
        Endpoint::post(format!(
            "{}/generate-doc",
            item(warehouse_id, domain_id, service_id)
        ))
    }
}

/// Services of a warehouse-scoped domain.
pub struct ServiceGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> ServiceGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn create(
        &self,
        warehouse_id: &str,
        domain_id: &str,
        request: &CreateServiceRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::create(warehouse_id, domain_id, request)?)
            .await
    }

    pub async fn update(
        &self,
        warehouse_id: &str,
        domain_id: &str,
        service_id: &str,
        request: &UpdateServiceRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::update(warehouse_id, domain_id, service_id, request)?)
            .await
    }

    pub async fn delete(
        &self,
        warehouse_id: &str,
        domain_id: &str,
        service_id: &str,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::delete(warehouse_id, domain_id, service_id))
            .await
    }

    pub async fn generate_doc(
        &self,
        warehouse_id: &str,
        domain_id: &str,
        service_id: &str,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::generate_doc(warehouse_id, domain_id, service_id))
            .await
    }
}
