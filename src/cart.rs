//! Cart
//!
//! The authoritative, mutable set of line items for one storefront session.
//!
//! A `Cart` is an explicitly constructed value, handed to whichever view
//! layer needs it; there is no ambient singleton. All operations are total:
//! unmatched keys are silent no-ops, never errors, because the UI may race a
//! remove against a quantity change and neither side should have to care.

use rust_decimal::Decimal;

use crate::{
    items::{LineItem, NewItem},
    pricing,
};

/// In-memory cart for the current session.
///
/// Insertion order is preserved for display; it carries no other meaning.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Add a candidate line item, merging into an existing slot when the
    /// composite key `(id, pet_id)` already exists.
    ///
    /// On a merge only the quantity accumulates; name, price, kind and pet
    /// name keep the values from the first add.
    pub fn add_item(&mut self, candidate: NewItem) {
        let existing = self
            .items
            .iter_mut()
            .find(|item| item.matches(&candidate.id, candidate.pet_id()));

        match existing {
            Some(item) => item.accumulate(candidate.resolved_quantity()),
            None => self.items.push(LineItem::from_candidate(candidate)),
        }
    }

    /// Set the quantity of the slot addressed by `(id, pet_id)`.
    ///
    /// A quantity of zero removes the slot; the cart never holds a
    /// zero-quantity line. A missing key is a silent no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: u32, pet_id: Option<&str>) {
        if quantity == 0 {
            self.remove_item(id, pet_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.matches(id, pet_id)) {
            item.set_quantity(quantity);
        }
    }

    /// Remove the slot addressed by `(id, pet_id)`, if present.
    pub fn remove_item(&mut self, id: &str, pet_id: Option<&str>) {
        self.items.retain(|item| !item.matches(id, pet_id));
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` across all line items. Empty cart totals
    /// zero. No rounding is applied.
    #[must_use]
    pub fn total(&self) -> Decimal {
        pricing::subtotal(&self.items)
    }

    /// Total number of units across all slots, for badge-style indicators.
    ///
    /// Counts units, not distinct slots: quantities 2 and 1 count as 3.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Look up the slot addressed by `(id, pet_id)`.
    #[must_use]
    pub fn get(&self, id: &str, pet_id: Option<&str>) -> Option<&LineItem> {
        self.items.iter().find(|item| item.matches(id, pet_id))
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct slots in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
