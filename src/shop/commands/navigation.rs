//! # Navigation Commands
//!
//! Selection movement within the focused pane and Tab pane cycling.

use super::{Command, CommandContext, CommandEvent, MovementDirection};
use crate::shop::events::AppMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Move the selection with arrow keys or vim-style j/k
pub struct SelectionMoveCommand;

impl Command for SelectionMoveCommand {
    fn process(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let direction = match event.code {
            KeyCode::Up | KeyCode::Char('k') => MovementDirection::Up,
            KeyCode::Down | KeyCode::Char('j') => MovementDirection::Down,
            _ => return Ok(Vec::new()),
        };

        Ok(vec![CommandEvent::SelectionMoveRequested { direction }])
    }

    fn name(&self) -> &'static str {
        "SelectionMove"
    }

    fn is_relevant(&self, context: &CommandContext) -> bool {
        context.state.mode == AppMode::Browse
    }
}

/// Cycle focus through the panes with Tab
pub struct PaneSwitchCommand;

impl Command for PaneSwitchCommand {
    fn process(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if event.code == KeyCode::Tab {
            Ok(vec![CommandEvent::PaneSwitchRequested])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "PaneSwitch"
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
    use crossterm::event::KeyModifiers;

    fn context(mode: AppMode) -> CommandContext {
        CommandContext::new(ViewModelSnapshot {
            mode,
            pane: Pane::Items,
            category_count: 2,
            item_count: 3,
            cart_line_count: 0,
        })
    }

    #[test]
    fn arrows_and_vim_keys_should_move_the_selection() {
        let command = SelectionMoveCommand;

        for code in [KeyCode::Up, KeyCode::Char('k')] {
            let events = command
                .process(KeyEvent::new(code, KeyModifiers::empty()), &context(AppMode::Browse))
                .unwrap();
            assert_eq!(
                events,
                vec![CommandEvent::SelectionMoveRequested {
                    direction: MovementDirection::Up
                }]
            );
        }

        for code in [KeyCode::Down, KeyCode::Char('j')] {
            let events = command
                .process(KeyEvent::new(code, KeyModifiers::empty()), &context(AppMode::Browse))
                .unwrap();
            assert_eq!(
                events,
                vec![CommandEvent::SelectionMoveRequested {
                    direction: MovementDirection::Down
                }]
            );
        }
    }

    #[test]
    fn navigation_should_be_irrelevant_while_detail_is_open() {
        assert!(!SelectionMoveCommand.is_relevant(&context(AppMode::Detail)));
        assert!(!PaneSwitchCommand.is_relevant(&context(AppMode::Detail)));
    }
}
