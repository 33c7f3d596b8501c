use crate::api_client::{ApiClientError, RestClient};
use koala_core::{CreateGlobalServiceRequest, Domain, DomainRequest, Envelope, Service, WarehouseRef};
use serde_json::Value;

pub mod endpoints {
    use crate::api_client::ApiClientError;
    use crate::gateways::Endpoint;
    use koala_core::{encode_segment, CreateGlobalServiceRequest, DomainRequest};

    const ROOT: &str = "/v1/domains";

    fn item(domain_id: &str) -> String {
        format!("{}/{}", ROOT, encode_segment(domain_id))
    }

    pub fn list() -> Endpoint {
        Endpoint::get(ROOT)
    }

    pub fn get(domain_id: &str) -> Endpoint {
        Endpoint::get(item(domain_id))
    }

    pub fn create(request: &DomainRequest) -> Result<Endpoint, ApiClientError> {
        Endpoint::post(ROOT).with_json(request)
    }

    pub fn update(domain_id: &str, request: &DomainRequest) -> Result<Endpoint, ApiClientError> {
        Endpoint::put(item(domain_id)).with_json(request)
    }

    pub fn delete(domain_id: &str) -> Endpoint {
        Endpoint::delete(item(domain_id))
    }

    pub fn generate_doc(domain_id: &str) -> Endpoint {
        Endpoint::post(format!("{}/generate-doc", item(domain_id)))
    }

    pub fn list_services(domain_id: &str) -> Endpoint {
        Endpoint::get(format!("{}/services", item(domain_id)))
    }

    pub fn create_service(
        domain_id: &str,
        request: &CreateGlobalServiceRequest,
    ) -> Result<Endpoint, ApiClientError> {
        Endpoint::post(format!("{}/services", item(domain_id))).with_json(request)
    }

    pub fn generate_service_doc(domain_id: &str, service_id: &str) -> Endpoint {
        Endpoint::post(format!(
            "{}/services/{}/generate-doc",
            item(domain_id),
            encode_segment(service_id)
        ))
    }

    pub fn list_warehouses() -> Endpoint {
        Endpoint::get(format!("{}/warehouses", ROOT))
    }
}

/// Cross-warehouse domains.
pub struct GlobalDomainGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> GlobalDomainGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self) -> Result<Envelope<Vec<Domain>>, ApiClientError> {
        self.rest.send(&endpoints::list()).await
    }

    pub async fn get(&self, domain_id: &str) -> Result<Envelope<Domain>, ApiClientError> {
        self.rest.send(&endpoints::get(domain_id)).await
    }

    pub async fn create(&self, request: &DomainRequest) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::create(request)?).await
    }

    pub async fn update(
        &self,
        domain_id: &str,
        request: &DomainRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::update(domain_id, request)?).await
    }

    pub async fn delete(&self, domain_id: &str) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::delete(domain_id)).await
    }

    pub async fn generate_doc(&self, domain_id: &str) -> Result<Envelope<Value>, ApiClientError> {
        self.rest.send(&endpoints::generate_doc(domain_id)).await
    }

    pub async fn list_services(
        &self,
        domain_id: &str,
    ) -> Result<Envelope<Vec<Service>>, ApiClientError> {
        self.rest.send(&endpoints::list_services(domain_id)).await
    }

    pub async fn create_service(
        &self,
        domain_id: &str,
        request: &CreateGlobalServiceRequest,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::create_service(domain_id, request)?)
            .await
    }

    pub async fn generate_service_doc(
        &self,
        domain_id: &str,
        service_id: &str,
    ) -> Result<Envelope<Value>, ApiClientError> {
        self.rest
            .send(&endpoints::generate_service_doc(domain_id, service_id))
            .await
    }

    /// Warehouses eligible for global services; used to resolve display names.
    pub async fn list_warehouses(&self) -> Result<Envelope<Vec<WarehouseRef>>, ApiClientError> {
        self.rest.send(&endpoints::list_warehouses()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_paths() {
        assert_eq!(endpoints::list().path, "/v1/domains");
        assert_eq!(endpoints::get("d1").path, "/v1/domains/d1");
        assert_eq!(endpoints::delete("d1").method, Method::DELETE);
        assert_eq!(endpoints::generate_doc("d1").path, "/v1/domains/d1/generate-doc");
        assert_eq!(endpoints::list_services("d1").path, "/v1/domains/d1/services");
        assert_eq!(
            endpoints::generate_service_doc("d1", "s1").path,
            "/v1/domains/d1/services/s1/generate-doc"
        );
        assert_eq!(endpoints::list_warehouses().path, "/v1/domains/warehouses");
    }

    #[test]
    fn test_create_service_body() {
        let request = CreateGlobalServiceRequest {
            warehouse_id: "w1".to_string(),
            service_id: "svc".to_string(),
            service_name: "Svc".to_string(),
            description: String::new(),
            source_globs: vec!["src/**".to_string()],
        };
        let endpoint = endpoints::create_service("d1", &request).unwrap();
        assert_eq!(endpoint.method, Method::POST);
        assert_eq!(endpoint.path, "/v1/domains/d1/services");
        let body = endpoint.body.unwrap();
        assert_eq!(body["warehouseId"], "w1");
        assert_eq!(body["sourceGlobs"], serde_json::json!(["src/**"]));
    }
}
