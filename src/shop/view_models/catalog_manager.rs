//! # Catalog Management
//!
//! Selection movement, category activation, and application of fetched
//! catalog data. Fetches themselves are described as [`FetchPlan`]s the
//! controller hands to the catalog service, keeping this layer free of
//! I/O.

use super::core::ViewModel;
use crate::shop::commands::MovementDirection;
use crate::shop::events::{ModelEvent, Pane, ViewEvent};
use crate::shop::models::{CatalogItem, Category};

/// A fetch the controller must issue on the view model's behalf
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    /// Generation to stamp the request with
    pub generation: u64,
    /// Category filter; None queries the unfiltered list
    pub category_id: Option<String>,
}

impl ViewModel {
    /// Move the selection within the focused pane, clamped to its bounds
    pub fn move_selection(&mut self, direction: MovementDirection) {
        let (index, len, event) = match self.current_pane {
            Pane::Categories => (
                &mut self.category_index,
                self.catalog.categories().len() + 1,
                ViewEvent::CatalogRedrawRequired,
            ),
            Pane::Items => (
                &mut self.item_index,
                self.catalog.items().len(),
                ViewEvent::CatalogRedrawRequired,
            ),
            Pane::Cart => (
                &mut self.cart_index,
                self.cart.len(),
                ViewEvent::CartRedrawRequired,
            ),
        };

        if len == 0 {
            return;
        }

        let moved = match direction {
            MovementDirection::Up => {
                if *index > 0 {
                    *index -= 1;
                    true
                } else {
                    false
                }
            }
            MovementDirection::Down => {
                if *index + 1 < len {
                    *index += 1;
                    true
                } else {
                    false
                }
            }
        };

        if moved {
            self.push_view_event(event);
        }
    }

    /// The item the items-pane selection rests on, if any
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.catalog.items().get(self.item_index)
    }

    /// Make the selected sidebar entry the active filter.
    ///
    /// Exactly one entry is active at a time - last-selected wins. Starts
    /// a new fetch generation and returns the plan to execute.
    pub fn activate_selected_category(&mut self) -> FetchPlan {
        let category_id = if self.category_index == 0 {
            None
        } else {
            self.catalog
                .categories()
                .get(self.category_index - 1)
                .map(|category| category.id.clone())
        };

        let generation = self.catalog.begin_items_fetch(category_id.clone());
        self.item_index = 0;

        self.publish_model_event(ModelEvent::CategorySelected {
            category_id: category_id.clone(),
        });
        self.push_view_event(ViewEvent::CatalogRedrawRequired);
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);

        FetchPlan {
            generation,
            category_id,
        }
    }

    /// Plan the startup fetch of the unfiltered item list
    pub fn begin_initial_items_fetch(&mut self) -> FetchPlan {
        let generation = self.catalog.begin_items_fetch(None);
        FetchPlan {
            generation,
            category_id: None,
        }
    }

    /// Re-issue the current query (same filter, fresh generation)
    pub fn refresh_plan(&mut self) -> FetchPlan {
        let category_id = self.catalog.active_category().map(str::to_string);
        let generation = self.catalog.begin_items_fetch(category_id.clone());

        self.push_view_event(ViewEvent::CatalogRedrawRequired);
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);

        FetchPlan {
            generation,
            category_id,
        }
    }

    /// Apply a fetched category list
    pub fn apply_categories(&mut self, categories: Vec<Category>) {
        let event = self.catalog.apply_categories(categories);
        self.category_index = self
            .category_index
            .min(self.catalog.categories().len());

        self.publish_model_event(event);
        self.push_view_event(ViewEvent::CatalogRedrawRequired);
    }

    /// Record a failed categories fetch; the sidebar falls back to
    /// "All Plants" only
    pub fn categories_fetch_failed(&mut self, message: String) {
        let event = self.catalog.categories_fetch_failed(message);
        self.category_index = 0;

        self.publish_model_event(event);
        self.push_view_event(ViewEvent::CatalogRedrawRequired);
        self.set_status_message("Could not load categories");
    }

    /// Apply a fetched item list; stale generations are dropped
    pub fn apply_items(&mut self, generation: u64, items: Vec<CatalogItem>) {
        let Some(event) = self.catalog.apply_items(generation, items) else {
            return;
        };

        if self.item_index >= self.catalog.items().len() {
            self.item_index = 0;
        }

        if self.verbose() {
            let count = self.catalog.items().len();
            self.set_status_message(format!("Loaded {count} plants"));
        }

        self.publish_model_event(event);
        self.push_view_event(ViewEvent::CatalogRedrawRequired);
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Record a failed items fetch; the list renders zero cards
    pub fn items_fetch_failed(&mut self, generation: u64, message: String) {
        let Some(event) = self.catalog.items_fetch_failed(generation, message) else {
            return;
        };

        self.item_index = 0;

        self.publish_model_event(event);
        self.push_view_event(ViewEvent::CatalogRedrawRequired);
        self.set_status_message("Could not load plants");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: "Tree".to_string(),
            price: 100.0,
            image_url: String::new(),
        }
    }

    #[test]
    fn selection_on_empty_lists_should_be_a_noop() {
        let mut vm = ViewModel::new();
        vm.switch_pane(); // Items, empty

        vm.move_selection(MovementDirection::Down);
        assert_eq!(vm.item_index(), 0);
    }

    #[test]
    fn stale_items_should_not_disturb_the_selection() {
        let mut vm = ViewModel::new();

        let stale = vm.begin_initial_items_fetch();
        let fresh = vm.refresh_plan();

        vm.apply_items(stale.generation, vec![item("old-1"), item("old-2")]);
        assert!(vm.catalog().items().is_empty());

        vm.apply_items(fresh.generation, vec![item("new-1")]);
        assert_eq!(vm.catalog().items().len(), 1);
        assert_eq!(vm.item_index(), 0);
    }

    #[test]
    fn item_selection_should_reset_when_the_list_shrinks() {
        let mut vm = ViewModel::new();
        let plan = vm.begin_initial_items_fetch();
        vm.apply_items(plan.generation, vec![item("a"), item("b"), item("c")]);

        vm.switch_pane(); // Items
        vm.move_selection(MovementDirection::Down);
        vm.move_selection(MovementDirection::Down);
        assert_eq!(vm.item_index(), 2);

        let plan = vm.refresh_plan();
        vm.apply_items(plan.generation, vec![item("only")]);
        assert_eq!(vm.item_index(), 0);
    }

    #[test]
    fn categories_failure_should_reset_the_sidebar() {
        let mut vm = ViewModel::new();
        vm.apply_categories(vec![Category {
            id: "1".to_string(),
            name: "Ferns".to_string(),
        }]);
        vm.move_selection(MovementDirection::Down);

        vm.categories_fetch_failed("boom".to_string());

        assert_eq!(vm.category_entry_count(), 1);
        assert_eq!(vm.category_index(), 0);
        assert_eq!(vm.status_message(), Some("Could not load categories"));
    }
}
