//! Warehouse-related API types

use crate::time::{deserialize_lenient, Timestamp};
use crate::de::null_to_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing status of a warehouse.
///
/// Transitions are driven entirely by the backend. Values outside the known
/// set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum WarehouseStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Ready,
    Canceled,
    Unauthorized,
    Error,
    Failed,
    Other(String),
}

impl WarehouseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WarehouseStatus::Pending => "PENDING",
            WarehouseStatus::Processing => "PROCESSING",
            WarehouseStatus::Completed => "COMPLETED",
            WarehouseStatus::Ready => "READY",
            WarehouseStatus::Canceled => "CANCELED",
            WarehouseStatus::Unauthorized => "UNAUTHORIZED",
            WarehouseStatus::Error => "ERROR",
            WarehouseStatus::Failed => "FAILED",
            WarehouseStatus::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WarehouseStatus::Completed)
    }
}

impl From<String> for WarehouseStatus {
    fn from(raw: String) -> Self {
        let key = raw.trim().to_ascii_uppercase();
        match key.as_str() {
            "PENDING" => WarehouseStatus::Pending,
            "PROCESSING" | "SYNCING" => WarehouseStatus::Processing,
            "COMPLETED" => WarehouseStatus::Completed,
            "READY" => WarehouseStatus::Ready,
            "CANCELED" | "CANCELLED" => WarehouseStatus::Canceled,
            "UNAUTHORIZED" => WarehouseStatus::Unauthorized,
            "ERROR" => WarehouseStatus::Error,
            "FAILED" => WarehouseStatus::Failed,
            _ => WarehouseStatus::Other(raw),
        }
    }
}

impl From<Option<String>> for WarehouseStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(WarehouseStatus::from).unwrap_or_default()
    }
}

impl From<WarehouseStatus> for String {
    fn from(status: WarehouseStatus) -> Self {
        match status {
            WarehouseStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WarehouseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked Git repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub address: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub status: WarehouseStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub updated_at: Option<Timestamp>,
}

/// Data of `GET /v1/warehouses`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehousePage {
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<Warehouse>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_pages: u32,
}

/// Minimal warehouse row used to resolve ids into names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of `POST /v1/warehouses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    pub address: String,
    pub branch: String,
}
