//! Reusable widget components.

pub mod detail;
pub mod form;
pub mod markdown;
pub mod modal;
pub mod status;
pub mod tree;

pub use detail::DetailPanel;
pub use form::FormWidget;
pub use markdown::MarkdownRenderer;
pub use modal::centered_rect;
pub use status::StatusBadge;
pub use tree::{TreeItem, TreeStyle, TreeWidget};
