//! # Greenline - Terminal Storefront for a Plant Catalog
//!
//! An interactive terminal shop front: browse plant categories and listings
//! from a remote catalog API, inspect items in a detail overlay, and manage
//! an in-memory shopping cart with a running total.
//! Built with clean MVVM architecture for maintainability and testability.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Business   │              │ - Cart  │
//! │ - Rendering │              │   Logic      │              │ - Catalog│
//! │ - Input     │              │ - Coordination│              │ - Detail│
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Input      │
//!                               │   Mapping    │
//!                               │ - Event Loop │
//!                               │ - Catalog    │
//!                               │   Fetches    │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod shop;

// Re-export main types for easy access
pub use shop::*;
