//! Extraction traversal and entrypoints.
//!
//! This module provides the machinery for extracting file leaves:
//!
//! - **`extract`**: the recursive walk — [`extract`], [`extract_with`],
//!   [`Extraction`]
//! - **`index`**: the identity-keyed path index ([`FileIndex`])
//! - **`path`**: dot-path segment joining
//! - **`predicate`**: the default extractability classification
//!   ([`is_extractable_file`])
//!
//! The value tree itself lives in `crate::value`; file leaf types live in
//! `crate::file`.

mod extract;
mod index;
mod path;
mod predicate;

pub use extract::{Extraction, extract, extract_with};
pub use index::FileIndex;
pub use predicate::is_extractable_file;
