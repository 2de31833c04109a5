//! # Cart Management
//!
//! View-model operations on the shopping cart: adding the selected item
//! and adjusting the selected cart line. All quantity semantics live in
//! the cart model; this layer adds selection handling and repaint
//! bookkeeping.

use super::core::ViewModel;
use crate::shop::events::ViewEvent;

impl ViewModel {
    /// Add the item under the items-pane selection to the cart
    pub fn add_selected_to_cart(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };

        let event = self.cart.add_or_increment(&item.id, &item.name, item.price);
        self.publish_model_event(event);

        if self.verbose() {
            self.set_status_message(format!("Added {} to cart", item.name));
        }

        self.push_view_event(ViewEvent::CartRedrawRequired);
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Increment the quantity of the selected cart line
    pub fn increment_selected_cart_line(&mut self) {
        let Some(line) = self.cart.lines().get(self.cart_index).cloned() else {
            return;
        };

        // Re-adding an existing id increments it; name and price are
        // already fixed by the first add
        let event = self
            .cart
            .add_or_increment(&line.id, &line.name, line.unit_price);
        self.publish_model_event(event);
        self.push_view_event(ViewEvent::CartRedrawRequired);
    }

    /// Decrement the selected cart line, removing it at quantity 1
    pub fn decrement_selected_cart_line(&mut self) {
        let Some(line) = self.cart.lines().get(self.cart_index).cloned() else {
            return;
        };

        if let Some(event) = self.cart.decrement(&line.id) {
            self.publish_model_event(event);
        }
        self.clamp_cart_selection();
        self.push_view_event(ViewEvent::CartRedrawRequired);
    }

    /// Remove the selected cart line outright
    pub fn remove_selected_cart_line(&mut self) {
        let Some(line) = self.cart.lines().get(self.cart_index).cloned() else {
            return;
        };

        if let Some(event) = self.cart.remove(&line.id) {
            self.publish_model_event(event);
        }
        self.clamp_cart_selection();
        self.push_view_event(ViewEvent::CartRedrawRequired);
    }

    fn clamp_cart_selection(&mut self) {
        if self.cart_index >= self.cart.len() {
            self.cart_index = self.cart.len().saturating_sub(1);
        }
    }
}
