//! REST request client for the KoalaWiki backend.

use crate::config::{AuthConfig, TuiConfig};
use crate::gateways::{
    AgentGateway, AiDocumentGateway, DocumentGateway, DomainGateway, Endpoint,
    GlobalDomainGateway, ServiceGateway, WarehouseGateway,
};
use koala_core::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Fixed prefix of every backend route.
pub const API_ROOT: &str = "/api";

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

/// Cloneable handle that hands out one gateway per backend resource.
#[derive(Clone)]
pub struct ApiClient {
    rest: RestClient,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let rest = RestClient::new(config)?;
        Ok(Self { rest })
    }

    pub fn warehouses(&self) -> WarehouseGateway<'_> {
        WarehouseGateway::new(&self.rest)
    }

    pub fn domains(&self) -> DomainGateway<'_> {
        DomainGateway::new(&self.rest)
    }

    pub fn services(&self) -> ServiceGateway<'_> {
        ServiceGateway::new(&self.rest)
    }

    pub fn documents(&self) -> DocumentGateway<'_> {
        DocumentGateway::new(&self.rest)
    }

    pub fn ai_documents(&self) -> AiDocumentGateway<'_> {
        AiDocumentGateway::new(&self.rest)
    }

    pub fn agents(&self) -> AgentGateway<'_> {
        AgentGateway::new(&self.rest)
    }

    pub fn global_domains(&self) -> GlobalDomainGateway<'_> {
        GlobalDomainGateway::new(&self.rest)
    }
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let mut headers = build_auth_headers(&config.auth)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of an endpoint path such as `/v1/agents`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_ROOT, path)
    }

    /// Send one request and decode the response envelope.
    ///
    /// The body is serialized only when present. Failures are logged here
    /// once and handed back to the caller untouched.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope<T>, ApiClientError> {
        let result = self.execute(method.clone(), path, body).await;
        if let Err(err) = &result {
            tracing::error!(method = %method, path, error = %err, "request failed");
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiClientError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope<T>, ApiClientError> {
        self.request(Method::POST, path, body).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope<T>, ApiClientError> {
        self.request(Method::PUT, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiClientError> {
        self.request(Method::DELETE, path, None).await
    }

    pub async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Envelope<T>, ApiClientError> {
        self.request(endpoint.method.clone(), &endpoint.path, endpoint.body.as_ref())
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope<T>, ApiClientError> {
        let carries_body = !matches!(method, Method::GET | Method::DELETE);
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body.filter(|_| carries_body) {
            request = request.json(body);
        }
        let response = request.send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiClientError> {
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Envelope::empty());
            }
            return Ok(serde_json::from_str::<Envelope<T>>(&text)?);
        }

        let message = match serde_json::from_str::<Envelope<Value>>(&text) {
            Ok(envelope) if envelope.message.is_some() || envelope.code.is_some() => {
                let code = envelope
                    .code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "-".to_string());
                format!("{}: {}", code, envelope.message.unwrap_or_default())
            }
            _ => text,
        };
        Err(ApiClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn build_auth_headers(auth: &AuthConfig) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &auth.api_key {
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(api_key).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    if let Some(jwt) = &auth.jwt {
        let value = format!("Bearer {}", jwt);
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&value).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers() {
        let auth = AuthConfig {
            api_key: Some("k".to_string()),
            jwt: Some("t".to_string()),
        };
        let headers = build_auth_headers(&auth).unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "k");
        assert_eq!(headers.get("authorization").unwrap(), "Bearer t");
        assert!(build_auth_headers(&AuthConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let auth = AuthConfig {
            api_key: Some("bad\nkey".to_string()),
            jwt: None,
        };
        assert!(matches!(
            build_auth_headers(&auth),
            Err(ApiClientError::Config(_))
        ));
    }
}
