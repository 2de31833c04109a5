//! # Catalog Commands
//!
//! Category activation and opening the item detail overlay.

use super::{Command, CommandContext, CommandEvent};
use crate::shop::events::{AppMode, Pane};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Enter in the categories pane makes the selection the active filter
pub struct CategoryActivateCommand;

impl Command for CategoryActivateCommand {
    fn process(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if event.code == KeyCode::Enter {
            Ok(vec![CommandEvent::CategoryActivateRequested])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "CategoryActivate"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Browse && context.state.pane == Pane::Categories
    }
}

/// Enter in the items pane opens the detail overlay for the selection
pub struct DetailOpenCommand;

impl Command for DetailOpenCommand {
    fn process(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if event.code == KeyCode::Enter && context.state.item_count > 0 {
            Ok(vec![CommandEvent::DetailOpenRequested])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "DetailOpen"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Browse && context.state.pane == Pane::Items
    }
}
