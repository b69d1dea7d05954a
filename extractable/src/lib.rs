//! File extraction from nested values.
//!
//! This crate separates:
//! - **Values**: a dynamic tree of scalars, shared lists and maps, and file
//!   leaves (`Value`), where container handles alias their allocation so the
//!   same sub-tree can appear in several places — including cyclically.
//! - **Extraction**: a deep clone of a value with every extractable file leaf
//!   replaced by null, plus an identity-keyed index of the paths at which
//!   each leaf occurred (`extract()` / `extract_with()`).
//!
//! What this crate does:
//! - models aliasable, possibly cyclic value trees (`Value`, `List`, `Map`)
//! - classifies file leaves (`File`, `Blob`, `FileSubstitute`) through an
//!   overridable predicate
//! - clones a value with file leaves nulled out while recording their paths
//! - provides `serde_json::Value` interop behind the `json` feature
//!
//! What it does not do:
//! - read, upload, or otherwise transport file contents
//! - validate payload schemas
//!
//! The typical caller extracts files from an operations payload, sends the
//! nulled clone as the textual part of a multipart request, and attaches the
//! indexed files under their recorded paths.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
#[cfg(feature = "extraction")]
mod extraction;
mod file;
#[cfg(feature = "json")]
pub mod json;
mod value;

// Re-exports from the value module
pub use file::{Blob, File, FileKind, FileSubstitute};
// Re-exports from the extraction module
#[cfg(feature = "extraction")]
pub use extraction::{Extraction, FileIndex, extract, extract_with, is_extractable_file};
#[cfg(feature = "json")]
pub use json::JsonError;
pub use value::{FileList, List, Map, Opaque, Value};
