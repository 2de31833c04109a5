//! # Models Module
//!
//! Re-exports all model implementations organized by category.
//! Models hold pure data and state; they never perform I/O.

// Import model modules
pub mod cart_model;
pub mod catalog_model;
pub mod detail_model;

// Re-export all models for easy access
pub use cart_model::{CartLine, CartModel};
pub use catalog_model::{CatalogItem, CatalogModel, Category};
pub use detail_model::DetailModel;
