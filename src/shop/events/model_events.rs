//! # Model Events
//!
//! Events emitted when data models change state.
//! These events notify the system of data changes for reactive updates.

use super::types::Pane;

/// Events emitted when models change
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// Cart contents changed (line added, quantity changed, line removed)
    CartChanged { line_count: usize, total: f64 },

    /// A category became the active filter (None means "All Plants")
    CategorySelected { category_id: Option<String> },

    /// Category list arrived from the catalog service
    CategoriesLoaded { count: usize },

    /// Item list arrived from the catalog service and was applied
    ItemsLoaded { generation: u64, count: usize },

    /// A catalog fetch failed; the display falls back to an empty list
    CatalogFetchFailed { message: String },

    /// Detail overlay opened for an item
    DetailOpened { item_id: String },

    /// Detail overlay closed
    DetailClosed,

    /// Focused pane switched
    PaneSwitched { old_pane: Pane, new_pane: Pane },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_changed_event_should_carry_totals() {
        let event = ModelEvent::CartChanged {
            line_count: 2,
            total: 1300.0,
        };

        match event {
            ModelEvent::CartChanged { line_count, total } => {
                assert_eq!(line_count, 2);
                assert_eq!(total, 1300.0);
            }
            _ => panic!("Expected CartChanged event"),
        }
    }

    #[test]
    fn category_selected_event_should_carry_optional_id() {
        let all = ModelEvent::CategorySelected { category_id: None };
        let one = ModelEvent::CategorySelected {
            category_id: Some("3".to_string()),
        };

        assert_ne!(all, one);
        match one {
            ModelEvent::CategorySelected { category_id } => {
                assert_eq!(category_id.as_deref(), Some("3"));
            }
            _ => panic!("Expected CategorySelected event"),
        }
    }

    #[test]
    fn pane_switched_event_should_carry_pane_data() {
        let event = ModelEvent::PaneSwitched {
            old_pane: Pane::Items,
            new_pane: Pane::Cart,
        };

        match event {
            ModelEvent::PaneSwitched { old_pane, new_pane } => {
                assert_eq!(old_pane, Pane::Items);
                assert_eq!(new_pane, Pane::Cart);
            }
            _ => panic!("Expected PaneSwitched event"),
        }
    }
}
