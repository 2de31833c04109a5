//! # Command Pattern Implementation
//!
//! Maps raw key events to storefront intents (`CommandEvent`s) against a
//! read-only snapshot of the view model state.
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each command implementation handles one
//!   specific family of actions
//! - **Stateless**: Commands don't hold state, they operate on the provided
//!   context snapshot
//! - **Pane Awareness**: Commands check the focused pane and act accordingly
//! - **Graceful Ignoring**: Commands ignore events they don't handle

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod cart;
pub mod catalog;
pub mod context;
pub mod navigation;

pub use app::{DetailCloseCommand, QuitCommand, RefreshCommand};
pub use cart::{CartAddCommand, CartQuantityCommand};
pub use catalog::{CategoryActivateCommand, DetailOpenCommand};
pub use context::{CommandContext, ViewModelSnapshot};
pub use navigation::{PaneSwitchCommand, SelectionMoveCommand};

/// Direction of a selection movement within the focused pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Up,
    Down,
}

/// Intents produced by commands and applied to the view model by the
/// controller
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    /// Move the selection within the focused pane
    SelectionMoveRequested { direction: MovementDirection },

    /// Cycle focus to the next pane
    PaneSwitchRequested,

    /// Make the selected category the active filter and fetch its items
    CategoryActivateRequested,

    /// Open the detail overlay for the selected item
    DetailOpenRequested,

    /// Close the detail overlay without adding
    DetailCloseRequested,

    /// Add the selected (or detailed) item to the cart
    CartAddRequested,

    /// Increment the selected cart line's quantity
    CartIncrementRequested,

    /// Decrement the selected cart line's quantity (removes at 1)
    CartDecrementRequested,

    /// Remove the selected cart line outright
    CartRemoveRequested,

    /// Re-issue the current catalog query
    RefreshRequested,

    /// Exit the application
    QuitRequested,
}

/// Trait for processing user input events into command events.
///
/// Commands are stateless and operate on the provided context snapshot,
/// following the principle that the Controller orchestrates but the
/// Commands decide.
///
/// ## Implementation Guidelines
///
/// 1. **Return empty for irrelevant events**: Check if the command applies
///    to the current mode/pane and return an empty vec if not.
/// 2. **Respect pane boundaries**: Cart keys shouldn't fire while the
///    Items pane is focused and vice versa.
/// 3. **Handle errors gracefully**: Return meaningful errors rather than
///    panicking.
pub trait Command {
    /// Process a key event into zero or more command events.
    ///
    /// An empty vec means the event was not relevant to this command and
    /// the registry keeps looking.
    fn process(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get a human-readable name for this command (for debugging/logging).
    fn name(&self) -> &'static str;

    /// Check if this command is relevant for the current state.
    ///
    /// This is an optimization to avoid unnecessary processing. The default
    /// implementation returns true (always try to process).
    fn is_relevant(&self, context: &CommandContext) -> bool {
        let _ = context;
        true
    }
}

/// Registry dispatching key events through the command set in order
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create the registry with the full storefront command set.
    ///
    /// Order matters: mode-scoped commands (detail overlay) come first so
    /// they shadow the browse bindings while the overlay is open.
    pub fn new() -> Self {
        Self {
            commands: vec![
                Box::new(DetailCloseCommand),
                Box::new(CartAddCommand),
                Box::new(QuitCommand),
                Box::new(PaneSwitchCommand),
                Box::new(SelectionMoveCommand),
                Box::new(CategoryActivateCommand),
                Box::new(DetailOpenCommand),
                Box::new(CartQuantityCommand),
                Box::new(RefreshCommand),
            ],
        }
    }

    /// Run a key event through the registry.
    ///
    /// The first command that produces events wins; an event no command
    /// claims yields an empty vec.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if !command.is_relevant(context) {
                continue;
            }

            let events = command.process(event, context)?;
            if !events.is_empty() {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return Ok(events);
            }
        }

        Ok(Vec::new())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
