//! # Cart Commands
//!
//! Adding items to the cart and adjusting cart line quantities.

use super::{Command, CommandContext, CommandEvent};
use crate::shop::events::{AppMode, Pane};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// 'a' adds the selected item (items pane) or the detailed item (overlay)
pub struct CartAddCommand;

impl Command for CartAddCommand {
    fn process(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if event.code == KeyCode::Char('a') && context.state.item_count > 0 {
            Ok(vec![CommandEvent::CartAddRequested])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "CartAdd"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Detail
            || (context.state.mode == AppMode::Browse && context.state.pane == Pane::Items)
    }
}

/// Quantity controls on the selected cart line: '+' increments,
/// '-' decrements (removing at quantity 1), 'x' removes outright
pub struct CartQuantityCommand;

impl Command for CartQuantityCommand {
    fn process(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.cart_line_count == 0 {
            return Ok(Vec::new());
        }

        let command_event = match event.code {
            KeyCode::Char('+') | KeyCode::Char('=') => CommandEvent::CartIncrementRequested,
            KeyCode::Char('-') => CommandEvent::CartDecrementRequested,
            KeyCode::Char('x') | KeyCode::Delete => CommandEvent::CartRemoveRequested,
            _ => return Ok(Vec::new()),
        };

        Ok(vec![command_event])
    }

    fn name(&self) -> &'static str {
        "CartQuantity"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Browse && context.state.pane == Pane::Cart
    }
}
