//! # ViewModel Module
//!
//! Modular ViewModel implementation split into focused responsibilities:
//! core state and focus handling, catalog selection and fetch planning,
//! cart operations, and the detail overlay.

mod cart_manager;
mod catalog_manager;
mod core;
mod detail_manager;

// Re-export the main ViewModel
pub use core::ViewModel;

// Re-export types that other modules need
pub use catalog_manager::FetchPlan;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::commands::MovementDirection;
    use crate::shop::events::{AppMode, Pane};
    use crate::shop::models::{CatalogItem, Category};

    fn item(id: &str, name: &str, price: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            description: "A plant.".to_string(),
            category: "Tree".to_string(),
            price,
            image_url: String::new(),
        }
    }

    fn loaded_view_model() -> ViewModel {
        let mut vm = ViewModel::new();
        vm.apply_categories(vec![
            Category {
                id: "1".to_string(),
                name: "Fruit Trees".to_string(),
            },
            Category {
                id: "2".to_string(),
                name: "Medicinal Trees".to_string(),
            },
        ]);
        let generation = vm.begin_initial_items_fetch().generation;
        vm.apply_items(
            generation,
            vec![
                item("a", "Mango", 500.0),
                item("b", "Neem", 300.0),
                item("c", "Coconut", 250.0),
            ],
        );
        vm
    }

    #[test]
    fn pane_switching_should_cycle_and_report() {
        let mut vm = ViewModel::new();
        assert_eq!(vm.current_pane(), Pane::Categories);

        vm.switch_pane();
        assert_eq!(vm.current_pane(), Pane::Items);
        vm.switch_pane();
        assert_eq!(vm.current_pane(), Pane::Cart);
        vm.switch_pane();
        assert_eq!(vm.current_pane(), Pane::Categories);
    }

    #[test]
    fn selection_should_clamp_to_list_bounds() {
        let mut vm = loaded_view_model();
        vm.switch_pane(); // Items

        vm.move_selection(MovementDirection::Up);
        assert_eq!(vm.item_index(), 0);

        for _ in 0..10 {
            vm.move_selection(MovementDirection::Down);
        }
        assert_eq!(vm.item_index(), 2);
    }

    #[test]
    fn activating_a_category_should_start_a_new_generation() {
        let mut vm = loaded_view_model();

        // Move to the second sidebar entry (first real category)
        vm.move_selection(MovementDirection::Down);
        let plan = vm.activate_selected_category();

        assert_eq!(plan.category_id.as_deref(), Some("1"));
        assert_eq!(vm.catalog().active_category(), Some("1"));
        assert!(vm.catalog().is_loading());

        // Selecting another category supersedes the first fetch
        vm.move_selection(MovementDirection::Down);
        let newer = vm.activate_selected_category();
        assert_eq!(newer.category_id.as_deref(), Some("2"));
        assert!(newer.generation > plan.generation);

        // The stale response is dropped, the newer one lands
        vm.apply_items(plan.generation, vec![item("stale", "Old", 1.0)]);
        assert!(vm.catalog().items().is_empty() || vm.catalog().is_loading());
        vm.apply_items(newer.generation, vec![item("d", "Arjun", 400.0)]);
        assert_eq!(vm.catalog().items().len(), 1);
        assert_eq!(vm.catalog().items()[0].id, "d");
    }

    #[test]
    fn all_plants_entry_should_clear_the_filter() {
        let mut vm = loaded_view_model();

        vm.move_selection(MovementDirection::Down);
        vm.activate_selected_category();
        assert!(vm.catalog().active_category().is_some());

        vm.move_selection(MovementDirection::Up);
        let plan = vm.activate_selected_category();
        assert_eq!(plan.category_id, None);
        assert_eq!(vm.catalog().active_category(), None);
    }

    #[test]
    fn adding_the_selected_item_should_fill_the_cart() {
        let mut vm = loaded_view_model();
        vm.switch_pane(); // Items

        vm.add_selected_to_cart();
        vm.add_selected_to_cart();
        vm.move_selection(MovementDirection::Down);
        vm.add_selected_to_cart();

        let lines = vm.cart().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Mango");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].name, "Neem");
        assert_eq!(vm.cart().total(), 1300.0);
    }

    #[test]
    fn detail_add_should_merge_with_list_adds() {
        let mut vm = loaded_view_model();
        vm.switch_pane(); // Items

        vm.add_selected_to_cart();
        vm.open_selected_detail();
        assert_eq!(vm.mode(), AppMode::Detail);

        vm.add_detail_item_to_cart();

        // Same id from the list and the overlay lands on one line
        assert_eq!(vm.cart().len(), 1);
        assert_eq!(vm.cart().lines()[0].quantity, 2);
        // Adding from the overlay closes it
        assert_eq!(vm.mode(), AppMode::Browse);
        assert!(!vm.detail().is_open());
    }

    #[test]
    fn cart_quantity_operations_should_track_the_selected_line() {
        let mut vm = loaded_view_model();
        vm.switch_pane(); // Items
        vm.add_selected_to_cart();
        vm.move_selection(MovementDirection::Down);
        vm.add_selected_to_cart();
        vm.switch_pane(); // Cart

        vm.increment_selected_cart_line();
        assert_eq!(vm.cart().lines()[0].quantity, 2);

        vm.move_selection(MovementDirection::Down);
        vm.decrement_selected_cart_line();
        // Neem was at quantity 1: decrement removes the line
        assert_eq!(vm.cart().len(), 1);
        // Selection clamps back onto the remaining line
        assert_eq!(vm.cart_index(), 0);

        vm.remove_selected_cart_line();
        assert!(vm.cart().is_empty());

        // Operations on an empty cart are no-ops
        vm.decrement_selected_cart_line();
        vm.remove_selected_cart_line();
        assert!(vm.cart().is_empty());
    }

    #[test]
    fn failed_fetch_should_leave_zero_cards_and_keep_working() {
        let mut vm = loaded_view_model();

        let plan = vm.refresh_plan();
        vm.items_fetch_failed(plan.generation, "connection reset".to_string());

        assert!(vm.catalog().items().is_empty());
        assert!(!vm.catalog().is_loading());

        // The UI keeps responding: pane switching and cart ops still work
        vm.switch_pane();
        vm.switch_pane();
        assert_eq!(vm.current_pane(), Pane::Cart);
    }
}
