//! Binary-object abstraction.
//!
//! A [`Blob`] pairs a media-type string (possibly empty) with a byte
//! source. The source is either inline bytes or a lazy [`BlobBytes`]
//! implementation whose read suspends; reading a blob's bytes is the only
//! suspension point in the flatten pipeline.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

/// Asynchronous byte source backing a lazy [`Blob`].
#[async_trait]
pub trait BlobBytes: fmt::Debug + Send + Sync {
    /// Read the full contents of this source.
    async fn bytes(&self) -> Bytes;
}

#[derive(Debug, Clone)]
enum Source {
    Inline(Bytes),
    Lazy(Arc<dyn BlobBytes>),
}

/// A platform binary object: media type plus byte source.
#[derive(Debug, Clone)]
pub struct Blob {
    media_type: String,
    source: Source,
}

impl Blob {
    /// Blob with an explicit media type over inline bytes.
    pub fn new(media_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            media_type: media_type.into(),
            source: Source::Inline(bytes.into()),
        }
    }

    /// Untyped blob over inline bytes (empty media type).
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self::new(String::new(), bytes)
    }

    /// Blob whose bytes are produced on demand by `source`.
    pub fn lazy(media_type: impl Into<String>, source: Arc<dyn BlobBytes>) -> Self {
        Self {
            media_type: media_type.into(),
            source: Source::Lazy(source),
        }
    }

    /// Declared media type. May be empty.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Read the blob's contents. Inline blobs resolve immediately; lazy
    /// blobs suspend on their underlying source.
    pub async fn bytes(&self) -> Bytes {
        match &self.source {
            Source::Inline(bytes) => bytes.clone(),
            Source::Lazy(source) => source.bytes().await,
        }
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        if self.media_type != other.media_type {
            return false;
        }
        match (&self.source, &other.source) {
            (Source::Inline(a), Source::Inline(b)) => a == b,
            (Source::Lazy(a), Source::Lazy(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(&'static [u8]);

    #[async_trait]
    impl BlobBytes for Fixed {
        async fn bytes(&self) -> Bytes {
            Bytes::from_static(self.0)
        }
    }

    #[tokio::test]
    async fn inline_bytes_resolve_immediately() {
        let blob = Blob::new("text/plain", &b"hello"[..]);
        assert_eq!(blob.media_type(), "text/plain");
        assert_eq!(blob.bytes().await, Bytes::from_static(b"hello"));
    }

    #[tokio::test]
    async fn untyped_blob_has_empty_media_type() {
        let blob = Blob::from_bytes(&b"raw"[..]);
        assert_eq!(blob.media_type(), "");
        assert_eq!(blob.bytes().await, Bytes::from_static(b"raw"));
    }

    #[tokio::test]
    async fn lazy_blob_reads_from_source() {
        let blob = Blob::lazy("image/jpeg", Arc::new(Fixed(b"jpeg bytes")));
        assert_eq!(blob.media_type(), "image/jpeg");
        assert_eq!(blob.bytes().await, Bytes::from_static(b"jpeg bytes"));
    }

    #[test]
    fn equality_compares_inline_contents() {
        assert_eq!(Blob::new("t", &b"x"[..]), Blob::new("t", &b"x"[..]));
        assert_ne!(Blob::new("t", &b"x"[..]), Blob::new("t", &b"y"[..]));
        assert_ne!(Blob::new("t", &b"x"[..]), Blob::new("u", &b"x"[..]));
    }

    #[test]
    fn equality_compares_lazy_sources_by_identity() {
        let source: Arc<dyn BlobBytes> = Arc::new(Fixed(b"x"));
        let a = Blob::lazy("t", source.clone());
        let b = Blob::lazy("t", source);
        assert_eq!(a, b);
        assert_ne!(a, Blob::lazy("t", Arc::new(Fixed(b"x"))));
        assert_ne!(a, Blob::new("t", &b"x"[..]));
    }
}
