//! API Request and Response Types
//!
//! Every type mirrors a JSON shape of the KoalaWiki REST API. Responses are
//! decoded leniently: only identifiers are mandatory, everything else falls
//! back to an explicit default.

// Warehouse types
mod warehouse;
pub use warehouse::*;

// Domain and service types
mod domain;
pub use domain::*;

// Document, catalog and AI document types
mod document;
pub use document::*;

// Agent types
mod agent;
pub use agent::*;
