//! Document, catalog and AI document types

use crate::time::{deserialize_lenient, Timestamp};
use crate::de::null_to_default;
use serde::{Deserialize, Serialize};

/// Node of a warehouse catalog tree.
///
/// Only nodes carrying a `path` resolve to a document; pure grouping nodes
/// have children only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogNode {
    #[serde(default, alias = "title", deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub children: Vec<CatalogNode>,
}

impl CatalogNode {
    pub fn document_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Data of `GET /v1/warehouses/{wid}/documents/{path}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    #[serde(default, deserialize_with = "null_to_default")]
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDocument {
    pub id: String,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, rename = "docType", alias = "type", deserialize_with = "null_to_default")]
    pub doc_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub content: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub updated_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_tree_decode() {
        let json = r#"[
            {"name":"Guide","children":[
                {"name":"Intro","path":"guide/intro.md"},
                {"title":"Setup","path":"guide/setup.md"}
            ]},
            {"name":"README","path":"README.md"}
        ]"#;
        let nodes: Vec<CatalogNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].has_children());
        assert!(nodes[0].document_path().is_none());
        assert_eq!(nodes[0].children[1].name, "Setup");
        assert_eq!(nodes[1].document_path(), Some("README.md"));
    }

    #[test]
    fn test_null_fields_default() {
        let node: CatalogNode =
            serde_json::from_str(r#"{"name":null,"path":null,"children":null}"#).unwrap();
        assert_eq!(node.name, "");
        assert!(!node.has_children());

        let doc: AiDocument = serde_json::from_str(
            r#"{"id":"a","title":null,"docType":null,"content":null,"status":null}"#,
        )
        .unwrap();
        assert_eq!((doc.title.as_str(), doc.doc_type.as_str(), doc.content.as_str()), ("", "", ""));

        let content: DocumentContent = serde_json::from_str(r#"{"content":null}"#).unwrap();
        assert_eq!(content.content, "");
    }

    #[test]
    fn test_blank_path_is_not_a_document() {
        let node: CatalogNode = serde_json::from_str(r#"{"name":"x","path":""}"#).unwrap();
        assert!(node.document_path().is_none());
    }

    #[test]
    fn test_ai_document_type_aliases() {
        let a: AiDocument =
            serde_json::from_str(r#"{"id":"a","docType":"SERVICE","createdAt":1700000000000}"#)
                .unwrap();
        assert_eq!(a.doc_type, "SERVICE");
        assert!(a.created_at.is_some());

        let b: AiDocument = serde_json::from_str(r#"{"id":"b","type":"PROJECT"}"#).unwrap();
        assert_eq!(b.doc_type, "PROJECT");
        assert_eq!(b.content, "");
    }
}
