//! # Events Module
//!
//! Re-exports all event system components organized by category.
//! This module maintains the same public API while organizing events
//! into logical groups for better maintainability.

// Import event modules
pub mod event_bus;
pub mod model_events;
pub mod types;
pub mod view_events;

// Re-export all types for easy access
pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus};
pub use model_events::ModelEvent;
pub use types::{AppMode, Pane};
pub use view_events::ViewEvent;
