//! # Detail Overlay Management
//!
//! Opening, closing, and adding from the modal item detail overlay.

use super::core::ViewModel;
use crate::shop::events::{AppMode, ViewEvent};

impl ViewModel {
    /// Open the detail overlay for the selected item.
    ///
    /// Opening while an overlay is shown replaces the displayed item in
    /// place; there is never more than one overlay.
    pub fn open_selected_detail(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };

        let event = self.detail.open(item);
        self.mode = AppMode::Detail;

        self.publish_model_event(event);
        self.push_view_event(ViewEvent::DetailRedrawRequired);
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Close the overlay without adding
    pub fn close_detail(&mut self) {
        if let Some(event) = self.detail.close() {
            self.publish_model_event(event);
        }
        self.mode = AppMode::Browse;

        // The overlay covered arbitrary screen area
        self.push_view_event(ViewEvent::FullRedrawRequired);
    }

    /// Add the displayed item to the cart, then close the overlay
    pub fn add_detail_item_to_cart(&mut self) {
        let Some(item) = self.detail.item().cloned() else {
            return;
        };

        let event = self.cart.add_or_increment(&item.id, &item.name, item.price);
        self.publish_model_event(event);

        if self.verbose() {
            self.set_status_message(format!("Added {} to cart", item.name));
        }

        self.close_detail();
        self.push_view_event(ViewEvent::CartRedrawRequired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::models::CatalogItem;

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            description: "Long description.".to_string(),
            category: "Tree".to_string(),
            price: 500.0,
            image_url: String::new(),
        }
    }

    fn loaded_view_model() -> ViewModel {
        let mut vm = ViewModel::new();
        let plan = vm.begin_initial_items_fetch();
        vm.apply_items(plan.generation, vec![item("a", "Mango"), item("b", "Neem")]);
        vm
    }

    #[test]
    fn open_with_no_items_should_stay_in_browse_mode() {
        let mut vm = ViewModel::new();
        vm.open_selected_detail();
        assert_eq!(vm.mode(), AppMode::Browse);
        assert!(!vm.detail().is_open());
    }

    #[test]
    fn open_should_show_the_selected_item() {
        let mut vm = loaded_view_model();
        vm.switch_pane(); // Items
        vm.open_selected_detail();

        assert_eq!(vm.mode(), AppMode::Detail);
        assert_eq!(vm.detail().item().unwrap().id, "a");

        vm.close_detail();
        assert_eq!(vm.mode(), AppMode::Browse);
        assert!(!vm.detail().is_open());
    }

    #[test]
    fn add_from_detail_should_add_once_and_close() {
        let mut vm = loaded_view_model();
        vm.switch_pane();
        vm.open_selected_detail();

        vm.add_detail_item_to_cart();

        assert_eq!(vm.cart().len(), 1);
        assert_eq!(vm.cart().lines()[0].name, "Mango");
        assert_eq!(vm.cart().lines()[0].quantity, 1);
        assert_eq!(vm.mode(), AppMode::Browse);

        // Add with no overlay open is a no-op
        vm.add_detail_item_to_cart();
        assert_eq!(vm.cart().lines()[0].quantity, 1);
    }

    #[test]
    fn close_should_request_a_full_repaint() {
        let mut vm = loaded_view_model();
        vm.switch_pane();
        vm.open_selected_detail();
        vm.collect_pending_view_events();

        vm.close_detail();

        let events = vm.collect_pending_view_events();
        assert!(events.contains(&crate::shop::events::ViewEvent::FullRedrawRequired));
    }
}
