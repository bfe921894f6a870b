//! Ducktype Driver Library
//!
//! Document loading for the `ducktype` CLI: parses JSON shape documents
//! into declared environments and runnable assignability checks.

pub mod document;

pub use document::{load_document, Check, DocumentError, LoadedDocument};
