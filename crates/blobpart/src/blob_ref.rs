//! The part record produced for each extracted leaf.

use blobpart_value::{Blob, Path};

/// Payload of one part.
///
/// `Deferred` marks a part whose bytes are intentionally not materialized
/// here: image-typed raw buffers are flagged for a separate upload path.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Blob(Blob),
    Deferred,
}

impl Payload {
    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            Payload::Blob(blob) => Some(blob),
            Payload::Deferred => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Payload::Deferred)
    }
}

/// One extracted leaf: where it came from, its bytes, and a kind tag.
///
/// Parts are immutable once created and carry no back-reference into the
/// source tree; `path` alone identifies the splice point for the uploaded
/// replacement. `kind` is `"Buffer"` for raw buffer leaves, the blob's
/// declared media type for blob leaves, or the runtime type name for
/// JSON-serialized fallback leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobRef {
    pub path: Path,
    pub payload: Payload,
    pub kind: String,
}

impl BlobRef {
    /// Pointer-form path, used as the multipart field name for this part.
    pub fn field_name(&self) -> String {
        self.path.to_string()
    }
}
