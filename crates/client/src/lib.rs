//! Transport-side glue for blobpart clients.
//!
//! Two small collaborators the part pipeline's callers need but the core
//! flattener does not: the queue-bypass predicate over client
//! configuration ([`Config::skip_queue`]) and a single-shot cross-context
//! request bridge ([`MessageBridge`]).

mod bridge;
mod config;

pub use bridge::{BridgeError, Envelope, MessageBridge};
pub use config::{Config, Dependency};
