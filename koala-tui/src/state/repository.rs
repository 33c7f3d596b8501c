use super::{report_failure, step_cursor};
use crate::api_client::ApiClient;
use crate::messages;
use crate::nav::Route;
use crate::notifications::Notifications;
use koala_core::{CatalogNode, Warehouse};
use std::collections::HashSet;

/// One visible line of the flattened catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    /// Child indices from the root joined by `.`, stable across reloads of
    /// an unchanged catalog.
    pub key: String,
    pub name: String,
    pub path: Option<String>,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// `/repository/:id`: warehouse detail and document catalog.
#[derive(Debug, Clone)]
pub struct RepositoryPage {
    pub warehouse_id: String,
    pub warehouse: Option<Warehouse>,
    pub catalog: Vec<CatalogNode>,
    pub expanded: HashSet<String>,
    pub cursor: usize,
    pub loading: bool,
}

impl RepositoryPage {
    pub fn new(warehouse_id: String) -> Self {
        Self {
            warehouse_id,
            warehouse: None,
            catalog: Vec::new(),
            expanded: HashSet::new(),
            cursor: 0,
            loading: false,
        }
    }

    /// Warehouse detail and catalog are fetched together; either failing
    /// fails both.
    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        self.loading = true;
        let warehouses = api.warehouses();
        let documents = api.documents();
        let joined = tokio::try_join!(
            warehouses.get(&self.warehouse_id),
            documents.catalog(&self.warehouse_id)
        );
        match joined {
            Ok((warehouse, catalog)) => {
                self.warehouse = warehouse.into_data();
                self.catalog = catalog.data_or_default();
                self.cursor = self.cursor.min(self.rows().len().saturating_sub(1));
            }
            Err(err) => report_failure(notes, messages::LOAD_FAILED, "repository", &err),
        }
        self.loading = false;
    }

    pub fn rows(&self) -> Vec<CatalogRow> {
        let mut rows = Vec::new();
        flatten(&self.catalog, "", 0, &self.expanded, &mut rows);
        rows
    }

    pub fn selected_row(&self) -> Option<CatalogRow> {
        self.rows().into_iter().nth(self.cursor)
    }

    pub fn select_next(&mut self) {
        self.cursor = step_cursor(self.cursor, self.rows().len(), true);
    }

    pub fn select_previous(&mut self) {
        self.cursor = step_cursor(self.cursor, self.rows().len(), false);
    }

    /// Open the selected node: a document node yields its route, a grouping
    /// node toggles its expansion.
    pub fn open_selected(&mut self) -> Option<Route> {
        let row = self.selected_row()?;
        if let Some(path) = row.path.filter(|p| !p.trim().is_empty()) {
            return Some(Route::Document {
                warehouse_id: self.warehouse_id.clone(),
                path,
            });
        }
        if row.has_children && !self.expanded.remove(&row.key) {
            self.expanded.insert(row.key);
        }
        None
    }
}

fn flatten(
    nodes: &[CatalogNode],
    prefix: &str,
    depth: usize,
    expanded: &HashSet<String>,
    out: &mut Vec<CatalogRow>,
) {
    for (index, node) in nodes.iter().enumerate() {
        let key = if prefix.is_empty() {
            index.to_string()
        } else {
            format!("{}.{}", prefix, index)
        };
        let is_expanded = expanded.contains(&key);
        out.push(CatalogRow {
            key: key.clone(),
            name: node.name.clone(),
            path: node.document_path().map(str::to_string),
            depth,
            has_children: node.has_children(),
            expanded: is_expanded,
        });
        if is_expanded {
            flatten(&node.children, &key, depth + 1, expanded, out);
        }
    }
}
