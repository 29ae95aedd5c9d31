//! The tree flattener: recursive visitor over [`Value`] trees.

use futures::future::{join_all, BoxFuture};

use blobpart_value::{Blob, Path, Value};

use crate::blob_ref::{BlobRef, Payload};
use crate::endpoint::EndpointInfo;

/// Type hint marking raw buffers whose bytes travel by a separate upload
/// path; their parts come back with [`Payload::Deferred`].
pub const IMAGE_HINT: &str = "Image";

/// Kind tag reported for raw buffer leaves.
pub const BUFFER_KIND: &str = "Buffer";

/// Options for [`flatten_with`].
#[derive(Debug, Default)]
pub struct FlattenOptions<'a> {
    /// Ambient type hint for the value; only meaningful down to the first
    /// array level.
    pub type_hint: Option<&'a str>,
    /// Path prefix recorded on every produced part.
    pub base_path: Path,
    /// Root traversal: element hints of a top-level array are refined
    /// through `endpoint` instead of the ambient hint.
    pub root: bool,
    pub endpoint: Option<&'a EndpointInfo>,
}

/// Flatten a payload into its ordered list of parts, with defaults:
/// no hint, empty base path, non-root traversal.
pub async fn flatten(value: &Value) -> Vec<BlobRef> {
    let parts = flatten_with(value, FlattenOptions::default()).await;
    tracing::debug!(parts = parts.len(), "flattened payload");
    parts
}

/// Flatten a payload into its ordered list of parts.
///
/// Walks `value` depth-first. Every binary or primitive leaf produces
/// exactly one [`BlobRef`] at its path; containers produce only their
/// children's parts, so empty arrays and objects contribute nothing.
/// Array siblings are traversed concurrently and their parts concatenated
/// in index order regardless of completion order; object keys are visited
/// in insertion order. The input tree is never mutated.
///
/// Total over the value domain: no input shape makes this fail, and cycles
/// are unrepresentable in the owned [`Value`] tree.
pub fn flatten_with<'a>(
    value: &'a Value,
    options: FlattenOptions<'a>,
) -> BoxFuture<'a, Vec<BlobRef>> {
    walk(
        value,
        options.type_hint,
        options.base_path,
        options.root,
        options.endpoint,
    )
}

fn walk<'a>(
    value: &'a Value,
    type_hint: Option<&'a str>,
    path: Path,
    root: bool,
    endpoint: Option<&'a EndpointInfo>,
) -> BoxFuture<'a, Vec<BlobRef>> {
    Box::pin(async move {
        match value {
            Value::Array(items) => {
                let children: Vec<_> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        // Endpoint hints apply one level deep, and only on
                        // a root traversal.
                        let hint = if root {
                            endpoint
                                .and_then(|info| info.component_hint(item))
                                .or(type_hint)
                        } else {
                            type_hint
                        };
                        walk(item, hint, path.join(index), false, endpoint)
                    })
                    .collect();
                join_all(children).await.into_iter().flatten().collect()
            }
            Value::Buffer(bytes) => {
                let payload = if type_hint == Some(IMAGE_HINT) {
                    Payload::Deferred
                } else {
                    Payload::Blob(Blob::from_bytes(bytes.clone()))
                };
                vec![BlobRef {
                    path,
                    payload,
                    kind: BUFFER_KIND.to_string(),
                }]
            }
            Value::Blob(blob) => {
                let data = blob.bytes().await;
                vec![BlobRef {
                    path,
                    payload: Payload::Blob(Blob::new(blob.media_type(), data)),
                    kind: blob.media_type().to_string(),
                }]
            }
            Value::Object(map) => {
                let mut parts = Vec::new();
                for (key, child) in map {
                    parts.extend(walk(child, None, path.join(key.as_str()), false, endpoint).await);
                }
                parts
            }
            leaf => vec![BlobRef {
                path,
                payload: Payload::Blob(Blob::from_bytes(leaf.json_text())),
                kind: leaf.type_of().to_string(),
            }],
        }
    })
}
