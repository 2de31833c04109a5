//! # Command Context
//!
//! Read-only state snapshot commands decide against. Keeps commands
//! decoupled from the live view model.

use crate::shop::events::{AppMode, Pane};
use crate::shop::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone)]
pub struct ViewModelSnapshot {
    pub mode: AppMode,
    pub pane: Pane,
    /// Entries in the category sidebar, including "All Plants"
    pub category_count: usize,
    pub item_count: usize,
    pub cart_line_count: usize,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            mode: view_model.mode(),
            pane: view_model.current_pane(),
            category_count: view_model.category_entry_count(),
            item_count: view_model.catalog().items().len(),
            cart_line_count: view_model.cart().len(),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }
}
