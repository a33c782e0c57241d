//! Items
//!
//! Cart line items and the composite identity that decides when two
//! additions merge into the same slot.

use rust_decimal::Decimal;

use crate::pricing::Priced;

/// What kind of catalog entry a line item refers to.
///
/// Purely descriptive. Downstream formatting groups by kind; totals ignore it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A physical product.
    Product,
    /// A scheduled service for a specific pet.
    Service,
}

/// The pet a service line is scheduled for.
///
/// Only `id` participates in slot identity; `name` is carried for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetRef {
    /// Pet identifier, opaque and caller-supplied.
    pub id: String,

    /// Display name paired with `id`.
    pub name: String,
}

impl PetRef {
    /// Create a new pet reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single entry in the cart.
///
/// Name and price are frozen at add time; a later add for the same slot only
/// accumulates quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    id: String,
    kind: ItemKind,
    name: String,
    price: Decimal,
    quantity: u32,
    pet: Option<PetRef>,
}

impl LineItem {
    pub(crate) fn from_candidate(candidate: NewItem) -> Self {
        let quantity = candidate.resolved_quantity();

        Self {
            id: candidate.id,
            kind: candidate.kind,
            name: candidate.name,
            price: candidate.price,
            quantity,
            pet: candidate.pet,
        }
    }

    /// Identifier of the underlying catalog item.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this line is a product or a pet service.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Display name, as copied from the catalog at add time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price, as copied from the catalog at add time.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Number of units in this slot. Always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The pet this line is scheduled for, if it is a pet-bound service.
    #[must_use]
    pub fn pet(&self) -> Option<&PetRef> {
        self.pet.as_ref()
    }

    /// Pet identifier component of this line's composite key.
    #[must_use]
    pub fn pet_id(&self) -> Option<&str> {
        self.pet.as_ref().map(|pet| pet.id.as_str())
    }

    /// Whether this line occupies the slot addressed by `(id, pet_id)`.
    ///
    /// Two lines are the same slot iff both key components are equal, with
    /// "no pet" a distinct value equal only to itself: a product line and a
    /// service line never collide, nor do service lines for different pets.
    #[must_use]
    pub fn matches(&self, id: &str, pet_id: Option<&str>) -> bool {
        self.id == id && self.pet_id() == pet_id
    }

    pub(crate) fn accumulate(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Priced for LineItem {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A candidate for [`Cart::add_item`](crate::cart::Cart::add_item).
///
/// Carries the catalog fields plus an optional quantity; `None` and `Some(0)`
/// both resolve to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    /// Identifier of the underlying catalog item.
    pub id: String,

    /// Product or service.
    pub kind: ItemKind,

    /// Display name, copied from the catalog.
    pub name: String,

    /// Unit price, copied from the catalog.
    pub price: Decimal,

    /// Pet the service is for; `None` for products.
    pub pet: Option<PetRef>,

    /// Requested quantity; defaults to 1 when omitted or zero.
    pub quantity: Option<u32>,
}

impl NewItem {
    /// Candidate for a product line.
    pub fn product(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Product,
            name: name.into(),
            price,
            pet: None,
            quantity: None,
        }
    }

    /// Candidate for a service line scheduled for `pet`.
    pub fn service(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        pet: PetRef,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Service,
            name: name.into(),
            price,
            pet: Some(pet),
            quantity: None,
        }
    }

    /// Set the requested quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Pet identifier component of the candidate's composite key.
    #[must_use]
    pub fn pet_id(&self) -> Option<&str> {
        self.pet.as_ref().map(|pet| pet.id.as_str())
    }

    /// The quantity the cart will use: the requested value, or 1 when the
    /// request was omitted or zero.
    #[must_use]
    pub fn resolved_quantity(&self) -> u32 {
        self.quantity.filter(|quantity| *quantity > 0).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_both_key_components() {
        let bath = LineItem::from_candidate(NewItem::service(
            "s1",
            "Banho",
            Decimal::from(50),
            PetRef::new("pet-a", "Rex"),
        ));

        assert!(bath.matches("s1", Some("pet-a")));
        assert!(!bath.matches("s1", Some("pet-b")));
        assert!(!bath.matches("s1", None));
        assert!(!bath.matches("s2", Some("pet-a")));
    }

    #[test]
    fn product_line_has_no_pet_component() {
        let food = LineItem::from_candidate(NewItem::product("p1", "Ração", Decimal::from(100)));

        assert_eq!(food.pet_id(), None);
        assert!(food.matches("p1", None));
        assert!(!food.matches("p1", Some("pet-a")));
    }

    #[test]
    fn resolved_quantity_defaults_omitted_and_zero_to_one() {
        let base = NewItem::product("p1", "Ração", Decimal::from(100));

        assert_eq!(base.resolved_quantity(), 1);
        assert_eq!(base.clone().with_quantity(0).resolved_quantity(), 1);
        assert_eq!(base.with_quantity(4).resolved_quantity(), 4);
    }

    #[test]
    fn accumulate_saturates_instead_of_wrapping() {
        let mut item = LineItem::from_candidate(
            NewItem::product("p1", "Ração", Decimal::from(100)).with_quantity(u32::MAX),
        );

        item.accumulate(5);

        assert_eq!(item.quantity(), u32::MAX);
    }
}
