//! Route table and tab navigation.

use koala_core::{encode_multi_segment, encode_segment};
use std::borrow::Cow;
use std::fmt;

/// A client-side location. Unmatched paths resolve to [`Route::Home`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Warehouses,
    Agents,
    Repository { id: String },
    Domains { warehouse_id: String },
    AiDocuments { warehouse_id: String },
    /// `path` may be empty; the page then skips its fetch.
    Document { warehouse_id: String, path: String },
    AiDocument { id: String },
    GlobalDomains,
}

/// Top-level tabs shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Warehouses,
    Domains,
    Agents,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Warehouses => "Warehouses",
            Tab::Domains => "Domains",
            Tab::Agents => "Agents",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Warehouses, Tab::Domains, Tab::Agents]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Tab {
        let all = Self::all();
        let idx = self.index();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }

    pub fn route(&self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Warehouses => Route::Warehouses,
            Tab::Domains => Route::GlobalDomains,
            Tab::Agents => Route::Agents,
        }
    }
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<Cow<'_, str>> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode)
            .collect();
        let parts: Vec<&str> = segments.iter().map(|s| s.as_ref()).collect();

        match parts.as_slice() {
            [] => Route::Home,
            ["warehouses"] => Route::Warehouses,
            ["agents"] => Route::Agents,
            ["domains"] => Route::GlobalDomains,
            ["repository", id] => Route::Repository { id: id.to_string() },
            ["repository", id, "domains"] => Route::Domains {
                warehouse_id: id.to_string(),
            },
            ["repository", id, "ai-documents"] => Route::AiDocuments {
                warehouse_id: id.to_string(),
            },
            ["document", warehouse_id, rest @ ..] => Route::Document {
                warehouse_id: warehouse_id.to_string(),
                path: rest.join("/"),
            },
            ["ai-documents", id] => Route::AiDocument { id: id.to_string() },
            _ => Route::Home,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Warehouses => "/warehouses".to_string(),
            Route::Agents => "/agents".to_string(),
            Route::GlobalDomains => "/domains".to_string(),
            Route::Repository { id } => format!("/repository/{}", encode_segment(id)),
            Route::Domains { warehouse_id } => {
                format!("/repository/{}/domains", encode_segment(warehouse_id))
            }
            Route::AiDocuments { warehouse_id } => {
                format!("/repository/{}/ai-documents", encode_segment(warehouse_id))
            }
            Route::Document { warehouse_id, path } => {
                let tail = encode_multi_segment(path);
                if tail.is_empty() {
                    format!("/document/{}", encode_segment(warehouse_id))
                } else {
                    format!("/document/{}/{}", encode_segment(warehouse_id), tail)
                }
            }
            Route::AiDocument { id } => format!("/ai-documents/{}", encode_segment(id)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Warehouses => "Warehouses",
            Route::Agents => "Agents",
            Route::Repository { .. } => "Repository",
            Route::Domains { .. } => "Domains",
            Route::AiDocuments { .. } => "AI Documents",
            Route::Document { .. } => "Document",
            Route::AiDocument { .. } => "AI Document",
            Route::GlobalDomains => "Global Domains",
        }
    }

    /// Header tab highlighted while this route is active.
    pub fn tab(&self) -> Tab {
        match self {
            Route::Home => Tab::Home,
            Route::Agents => Tab::Agents,
            Route::GlobalDomains => Tab::Domains,
            Route::Warehouses
            | Route::Repository { .. }
            | Route::Domains { .. }
            | Route::AiDocuments { .. }
            | Route::Document { .. }
            | Route::AiDocument { .. } => Tab::Warehouses,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn decode(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}
