//! Resource gateways.
//!
//! Every backend operation is first built as a pure [`Endpoint`] so URL
//! construction can be checked without a network. The borrowed gateway structs
//! send those endpoints through [`RestClient`] and decode the envelope.

mod agent;
mod ai_document;
mod document;
mod domain;
mod global_domain;
mod service;
mod warehouse;

pub use agent::AgentGateway;
pub use ai_document::AiDocumentGateway;
pub use document::DocumentGateway;
pub use domain::DomainGateway;
pub use global_domain::GlobalDomainGateway;
pub use service::ServiceGateway;
pub use warehouse::{WarehouseGateway, WarehouseQuery};

pub mod endpoints {
    //! Pure endpoint builders, grouped by resource.
    pub use super::agent::endpoints as agent;
    pub use super::ai_document::endpoints as ai_document;
    pub use super::document::endpoints as document;
    pub use super::domain::endpoints as domain;
    pub use super::global_domain::endpoints as global_domain;
    pub use super::service::endpoints as service;
    pub use super::warehouse::endpoints as warehouse;
}

use crate::api_client::ApiClientError;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// One backend call: verb, path below the API root, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}
