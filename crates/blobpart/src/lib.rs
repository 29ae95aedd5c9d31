//! Flatten nested payloads into discrete binary parts for multipart
//! transmission, and write replacement values back by path.
//!
//! A payload handed to [`flatten`] is walked depth-first; every leaf is
//! described by a [`BlobRef`] carrying its [`Path`], its bytes (or a
//! deferred marker), and a kind tag. After the transport layer uploads the
//! extracted parts and receives replacement references,
//! [`write_at_path`] splices each reference back into the original payload
//! shape at the exact path recorded during extraction.
//!
//! Array siblings are traversed concurrently (blob reads are the only
//! suspension points) but their parts are always concatenated in index
//! order, never by completion time. The input tree is never mutated by
//! [`flatten`]; [`write_at_path`] mutates its target in place.

mod blob_ref;
mod endpoint;
mod walk;
mod write;

pub use blob_ref::{BlobRef, Payload};
pub use endpoint::{EndpointInfo, ParameterInfo};
pub use walk::{flatten, flatten_with, FlattenOptions, BUFFER_KIND, IMAGE_HINT};
pub use write::{write_at_path, AddressingError};

pub use blobpart_value::{Blob, BlobBytes, Key, Path, PathError, Value};
