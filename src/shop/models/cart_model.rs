//! Cart model for MVVM architecture
//!
//! An ordered collection of line items with add-or-increment,
//! decrement-or-remove, explicit removal, and total computation.
//! Malformed input is coerced to safe defaults rather than rejected;
//! no operation on this model can fail.

use crate::shop::events::ModelEvent;

/// Name used when an item arrives without one
pub const UNKNOWN_NAME: &str = "Unknown";

/// One row in the shopping cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Catalog id of the item (unique within the cart)
    pub id: String,
    /// Item name as first seen
    pub name: String,
    /// Unit price as first seen, finite and non-negative
    pub unit_price: f64,
    /// Never observable as 0; reaching 0 removes the line
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price times quantity)
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// In-memory shopping cart
///
/// Holds at most one [`CartLine`] per distinct item id, in insertion
/// order. Lost on exit; there is no persistence.
#[derive(Debug, Clone, Default)]
pub struct CartModel {
    lines: Vec<CartLine>,
}

impl CartModel {
    /// Create a new, empty cart
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add an item, or increment its quantity when already present.
    ///
    /// The name and price of an existing line are left unchanged -
    /// first-seen wins. New lines get quantity 1. A non-finite or
    /// negative price is coerced to 0 and an empty name becomes
    /// "Unknown"; no error is raised for malformed input.
    pub fn add_or_increment(&mut self, id: &str, name: &str, unit_price: f64) -> ModelEvent {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                id: id.to_string(),
                name: sanitize_name(name),
                unit_price: sanitize_price(unit_price),
                quantity: 1,
            });
        }

        self.changed_event()
    }

    /// Reduce a line's quantity by 1, removing the line at quantity 1.
    ///
    /// Returns None (no-op) when the id is not in the cart.
    pub fn decrement(&mut self, id: &str) -> Option<ModelEvent> {
        let index = self.lines.iter().position(|line| line.id == id)?;

        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }

        Some(self.changed_event())
    }

    /// Delete the line for an id unconditionally; no-op when absent.
    pub fn remove(&mut self, id: &str) -> Option<ModelEvent> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        self.lines.remove(index);
        Some(self.changed_event())
    }

    /// Sum of unit price times quantity over all lines; 0 when empty.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Current lines in insertion order (restartable read, not a live iterator)
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines in the cart
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn changed_event(&self) -> ModelEvent {
        ModelEvent::CartChanged {
            line_count: self.lines.len(),
            total: self.total(),
        }
    }
}

/// Coerce a price to a finite, non-negative number. Anything else is 0.
fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price >= 0.0 {
        price
    } else {
        0.0
    }
}

/// Coerce an absent or blank name to the "Unknown" placeholder
fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_adds_should_accumulate_quantity_and_total() {
        let mut cart = CartModel::new();

        for _ in 0..5 {
            cart.add_or_increment("a", "Mango", 500.0);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), 2500.0);
    }

    #[test]
    fn first_seen_name_and_price_should_win() {
        let mut cart = CartModel::new();

        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("a", "Mango Deluxe", 900.0);

        assert_eq!(cart.lines()[0].name, "Mango");
        assert_eq!(cart.lines()[0].unit_price, 500.0);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 1000.0);
    }

    #[test]
    fn mixed_adds_should_keep_lines_and_total_consistent() {
        let mut cart = CartModel::new();

        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("b", "Neem", 300.0);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            CartLine {
                id: "a".to_string(),
                name: "Mango".to_string(),
                unit_price: 500.0,
                quantity: 2,
            }
        );
        assert_eq!(
            lines[1],
            CartLine {
                id: "b".to_string(),
                name: "Neem".to_string(),
                unit_price: 300.0,
                quantity: 1,
            }
        );
        assert_eq!(cart.total(), 1300.0);
    }

    #[test]
    fn decrement_should_reduce_quantity_and_total_by_one_unit() {
        let mut cart = CartModel::new();
        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("a", "Mango", 500.0);

        let event = cart.decrement("a");

        assert!(event.is_some());
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 1000.0);
    }

    #[test]
    fn decrement_at_quantity_one_should_remove_the_line() {
        let mut cart = CartModel::new();
        cart.add_or_increment("a", "Mango", 500.0);

        cart.decrement("a");
        assert!(cart.is_empty());

        // Second decrement is a no-op on the now-absent id
        assert!(cart.decrement("a").is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn remove_should_delete_regardless_of_quantity() {
        let mut cart = CartModel::new();
        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("b", "Neem", 300.0);

        cart.remove("a");

        assert!(cart.lines().iter().all(|line| line.id != "a"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 300.0);

        // Removing an absent id is a no-op
        assert!(cart.remove("a").is_none());
    }

    #[test]
    fn empty_cart_total_should_be_zero() {
        let cart = CartModel::new();
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn lines_should_preserve_insertion_order() {
        let mut cart = CartModel::new();
        cart.add_or_increment("c", "Coconut", 250.0);
        cart.add_or_increment("a", "Mango", 500.0);
        cart.add_or_increment("b", "Neem", 300.0);
        cart.add_or_increment("a", "Mango", 500.0);

        let ids: Vec<&str> = cart.lines().iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn malformed_input_should_be_coerced_not_rejected() {
        let mut cart = CartModel::new();

        cart.add_or_increment("a", "", f64::NAN);
        cart.add_or_increment("b", "  ", -50.0);

        assert_eq!(cart.lines()[0].name, UNKNOWN_NAME);
        assert_eq!(cart.lines()[0].unit_price, 0.0);
        assert_eq!(cart.lines()[1].name, UNKNOWN_NAME);
        assert_eq!(cart.lines()[1].unit_price, 0.0);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn mutations_should_emit_cart_changed_events() {
        let mut cart = CartModel::new();

        let event = cart.add_or_increment("a", "Mango", 500.0);
        assert_eq!(
            event,
            ModelEvent::CartChanged {
                line_count: 1,
                total: 500.0
            }
        );

        let event = cart.decrement("a").unwrap();
        assert_eq!(
            event,
            ModelEvent::CartChanged {
                line_count: 0,
                total: 0.0
            }
        );
    }
}
