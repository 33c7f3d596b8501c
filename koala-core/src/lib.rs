//! KoalaWiki Core - Wire Types
//!
//! Transport DTOs exchanged with the KoalaWiki REST API, the response
//! envelope every endpoint wraps them in, and the small pure helpers the
//! console needs before anything touches the network (glob normalisation,
//! path-segment escaping). No I/O lives here.

pub mod de;
pub mod envelope;
pub mod globs;
pub mod path;
pub mod time;
pub mod types;

pub use envelope::{Envelope, ListPayload};
pub use globs::{join_source_globs, normalize_source_globs};
pub use path::{encode_multi_segment, encode_segment};
pub use time::Timestamp;
pub use types::*;
