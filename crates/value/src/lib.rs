//! Dynamic payload values for blobpart.
//!
//! Client payloads are arbitrary, arbitrarily-nested trees mixing JSON
//! primitives with two kinds of binary leaves (raw buffers and typed
//! blobs). This crate provides:
//!
//! - [`Value`] - the schema-less payload tree
//! - [`Blob`] / [`BlobBytes`] - the binary-object abstraction with an
//!   asynchronous byte source
//! - [`Key`] / [`Path`] - positional addresses into a payload tree, with a
//!   pointer-style string form used as multipart field names

mod blob;
mod path;
mod value;

pub use blob::{Blob, BlobBytes};
pub use path::{Key, Path, PathError};
pub use value::Value;
