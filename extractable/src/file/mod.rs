//! File leaf types.
//!
//! This module provides the catalog of extractable file-like values:
//!
//! - **[`File`]**: the leaf handle itself; clones share identity
//! - **[`Blob`]**: in-memory binary payload, optionally named and typed
//! - **[`FileSubstitute`]**: uri/name/content-type marker for platforms
//!   without native file objects
//!
//! Extraction keys its path index on leaf *identity*: two `File` clones of
//! one handle are the same leaf, while two separately constructed files with
//! identical contents are distinct leaves.

mod blob;
mod substitute;

pub use blob::Blob;
pub use substitute::FileSubstitute;

use std::rc::Rc;

/// A file leaf in a value tree.
///
/// `File` is a cheap handle over shared storage. Cloning shares identity,
/// which is what the extraction index groups occurrences by:
///
/// ```rust
/// use extractable::{Blob, File};
///
/// let file = File::from(Blob::new(b"payload".to_vec()).with_name("a.txt"));
/// let alias = file.clone();
/// assert!(file.ptr_eq(&alias));
/// ```
#[derive(Clone, Debug)]
pub struct File {
    kind: Rc<FileKind>,
}

/// The concrete kind of a file leaf.
#[derive(Clone, Debug)]
pub enum FileKind {
    /// In-memory binary payload.
    Blob(Blob),
    /// Metadata marker standing in for a native file object.
    Substitute(FileSubstitute),
}

impl File {
    /// Wraps a file kind in a fresh handle.
    #[must_use]
    pub fn new(kind: FileKind) -> Self {
        Self {
            kind: Rc::new(kind),
        }
    }

    /// The concrete kind of this file.
    #[must_use]
    pub fn kind(&self) -> &FileKind {
        &self.kind
    }

    /// Display name, when the file carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &*self.kind {
            FileKind::Blob(blob) => blob.name(),
            FileKind::Substitute(substitute) => Some(substitute.name()),
        }
    }

    /// Content-type label, when the file carries one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match &*self.kind {
            FileKind::Blob(blob) => blob.content_type(),
            FileKind::Substitute(substitute) => Some(substitute.content_type()),
        }
    }

    /// The blob payload, if this is a blob-backed file.
    #[must_use]
    pub fn as_blob(&self) -> Option<&Blob> {
        match &*self.kind {
            FileKind::Blob(blob) => Some(blob),
            FileKind::Substitute(_) => None,
        }
    }

    /// The substitute marker, if this is one.
    #[must_use]
    pub fn as_substitute(&self) -> Option<&FileSubstitute> {
        match &*self.kind {
            FileKind::Substitute(substitute) => Some(substitute),
            FileKind::Blob(_) => None,
        }
    }

    /// Whether `self` and `other` are the same leaf.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.kind, &other.kind)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.kind) as *const () as usize
    }
}

impl From<Blob> for File {
    fn from(blob: Blob) -> Self {
        Self::new(FileKind::Blob(blob))
    }
}

impl From<FileSubstitute> for File {
    fn from(substitute: FileSubstitute) -> Self {
        Self::new(FileKind::Substitute(substitute))
    }
}

#[cfg(test)]
mod tests {
    use super::{Blob, File, FileSubstitute};

    #[test]
    fn clones_share_identity_and_distinct_files_do_not() {
        let file = File::from(Blob::new(b"same".to_vec()));
        let twin = File::from(Blob::new(b"same".to_vec()));
        assert!(file.ptr_eq(&file.clone()));
        assert!(!file.ptr_eq(&twin));
    }

    #[test]
    fn accessors_follow_the_kind() {
        let blob = File::from(
            Blob::new(b"bytes".to_vec())
                .with_name("photo.png")
                .with_content_type("image/png"),
        );
        assert_eq!(blob.name(), Some("photo.png"));
        assert_eq!(blob.content_type(), Some("image/png"));
        assert!(blob.as_blob().is_some());
        assert!(blob.as_substitute().is_none());

        let substitute = File::from(FileSubstitute::new(
            "content://media/1",
            "photo.png",
            "image/png",
        ));
        assert_eq!(substitute.name(), Some("photo.png"));
        assert_eq!(substitute.content_type(), Some("image/png"));
        assert!(substitute.as_blob().is_none());
        assert_eq!(
            substitute.as_substitute().unwrap().uri(),
            "content://media/1"
        );
    }

    #[test]
    fn anonymous_blob_has_no_name_or_type() {
        let file = File::from(Blob::new(b"raw".to_vec()));
        assert_eq!(file.name(), None);
        assert_eq!(file.content_type(), None);
    }
}
