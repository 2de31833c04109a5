//! # Application Commands
//!
//! Quit, refresh, and detail-overlay dismissal.

use super::{Command, CommandContext, CommandEvent};
use crate::shop::events::AppMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Quit on 'q' (browse mode) or Ctrl+C (any mode)
pub struct QuitCommand;

impl Command for QuitCommand {
    fn process(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let ctrl_c = event.code == KeyCode::Char('c')
            && event.modifiers.contains(KeyModifiers::CONTROL);
        let plain_q = event.code == KeyCode::Char('q')
            && event.modifiers.is_empty()
            && context.state.mode == AppMode::Browse;

        if ctrl_c || plain_q {
            Ok(vec![CommandEvent::QuitRequested])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

/// Close the detail overlay on Esc or 'q'
pub struct DetailCloseCommand;

impl Command for DetailCloseCommand {
    fn process(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Esc | KeyCode::Char('q') => Ok(vec![CommandEvent::DetailCloseRequested]),
            _ => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "DetailClose"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Detail
    }
}

/// Re-issue the current catalog query on 'r'
pub struct RefreshCommand;

impl Command for RefreshCommand {
    fn process(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if event.code == KeyCode::Char('r') && event.modifiers.is_empty() {
            Ok(vec![CommandEvent::RefreshRequested])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "Refresh"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Browse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::commands::ViewModelSnapshot;
    use crate::shop::events::Pane;

    fn context(mode: AppMode) -> CommandContext {
        CommandContext::new(ViewModelSnapshot {
            mode,
            pane: Pane::Items,
            category_count: 0,
            item_count: 0,
            cart_line_count: 0,
        })
    }

    #[test]
    fn quit_should_ignore_q_while_detail_is_open() {
        let command = QuitCommand;
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());

        let events = command.process(q, &context(AppMode::Detail)).unwrap();
        assert!(events.is_empty());

        let events = command.process(q, &context(AppMode::Browse)).unwrap();
        assert_eq!(events, vec![CommandEvent::QuitRequested]);
    }

    #[test]
    fn detail_close_should_only_be_relevant_in_detail_mode() {
        let command = DetailCloseCommand;
        assert!(command.is_relevant(&context(AppMode::Detail)));
        assert!(!command.is_relevant(&context(AppMode::Browse)));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::empty());
        let events = command.process(esc, &context(AppMode::Detail)).unwrap();
        assert_eq!(events, vec![CommandEvent::DetailCloseRequested]);
    }

    #[test]
    fn refresh_should_fire_on_r() {
        let command = RefreshCommand;
        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty());

        let events = command.process(r, &context(AppMode::Browse)).unwrap();
        assert_eq!(events, vec![CommandEvent::RefreshRequested]);
    }
}
