//! Domain and service API types

use crate::time::{deserialize_lenient, Timestamp};
use crate::de::null_to_default;
use serde::{Deserialize, Serialize};

/// Logical grouping of services, scoped to a warehouse or global.
///
/// The list endpoints never embed `services`; they are attached client-side
/// from the per-domain detail call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub code: String,
    #[serde(default)]
    pub document_content: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub updated_at: Option<Timestamp>,
}

impl Domain {
    pub fn has_document(&self) -> bool {
        self.document_content
            .as_deref()
            .is_some_and(|doc| !doc.trim().is_empty())
    }
}

/// A named subset of a warehouse's source tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub domain_id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub service_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub service_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_content: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub source_globs: Vec<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub updated_at: Option<Timestamp>,
}

impl Service {
    pub fn has_document(&self) -> bool {
        self.document_content
            .as_deref()
            .is_some_and(|doc| !doc.trim().is_empty())
    }
}

/// Body of domain create/update calls, warehouse-scoped and global alike.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRequest {
    pub name: String,
    pub description: String,
    pub code: String,
}

/// Body of `POST /v1/warehouses/{wid}/domains/{did}/services`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub service_id: String,
    pub service_name: String,
    pub description: String,
    pub source_globs: Vec<String>,
}

/// Body of `PUT /v1/warehouses/{wid}/domains/{did}/services/{sid}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub service_name: String,
    pub description: String,
    pub source_globs: Vec<String>,
}

/// Body of `POST /v1/domains/{id}/services`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGlobalServiceRequest {
    pub warehouse_id: String,
    pub service_id: String,
    pub service_name: String,
    pub description: String,
    pub source_globs: Vec<String>,
}
