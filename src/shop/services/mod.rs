//! # Services Module
//!
//! Network-facing services. Services own their I/O and report results
//! back to the UI loop through channels; they never touch the models
//! directly.

pub mod catalog;

pub use catalog::{CatalogError, CatalogMessage, CatalogService};
