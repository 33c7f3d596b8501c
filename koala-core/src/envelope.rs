//! Response envelope shared by every KoalaWiki endpoint.

use crate::de::null_to_default;
use serde::{Deserialize, Serialize};

/// `{ code, message, data, timestamp }` wrapper returned by the backend.
///
/// `data` is frequently absent or `null` (commands, empty lists, errors), so
/// it is always modelled as optional and callers pick an explicit default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl<T> Envelope<T> {
    /// Envelope carrying no payload, used for empty 2xx bodies.
    pub fn empty() -> Self {
        Self {
            code: None,
            message: None,
            data: None,
            timestamp: None,
        }
    }

    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::empty()
        }
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Payload, or `T::default()` when the backend sent none.
    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// List payload that is either a bare array or a page object.
///
/// Paginated backends wrap rows in `{ items | content, total, ... }`; older
/// endpoints return the array directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Page(PagePayload<T>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagePayload<T> {
    #[serde(default, deserialize_with = "null_to_default", alias = "content")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Items(items) => items,
            ListPayload::Page(page) => page.items,
        }
    }
}

impl<T> Default for ListPayload<T> {
    fn default() -> Self {
        ListPayload::Items(Vec::new())
    }
}
