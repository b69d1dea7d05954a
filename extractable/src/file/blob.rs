//! In-memory binary payloads.

use std::fmt;

/// An in-memory binary payload, optionally named and typed.
///
/// A bare blob is anonymous; `with_name` / `with_content_type` attach the
/// metadata a named platform file would carry. The bytes are stored as-is —
/// this crate never reads from or writes to the file system.
#[derive(Clone)]
pub struct Blob {
    name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl Blob {
    /// Creates an anonymous blob over `bytes`.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: None,
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Attaches a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches a content-type label.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Content-type label, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The payload bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Payload bytes are elided; only the size is rendered.
impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Blob;

    #[test]
    fn builder_attaches_metadata() {
        let blob = Blob::new(b"data".to_vec())
            .with_name("report.pdf")
            .with_content_type("application/pdf");
        assert_eq!(blob.name(), Some("report.pdf"));
        assert_eq!(blob.content_type(), Some("application/pdf"));
        assert_eq!(blob.bytes(), b"data");
        assert_eq!(blob.len(), 4);
        assert!(!blob.is_empty());
    }

    #[test]
    fn debug_elides_payload_bytes() {
        let blob = Blob::new(b"secret-bytes".to_vec()).with_name("a");
        let rendered = format!("{blob:?}");
        assert!(rendered.contains("len: 12"));
        assert!(!rendered.contains("secret-bytes"));
    }
}
