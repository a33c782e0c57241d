//! Pawcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    catalog::{CatalogError, CatalogRecord, product_candidate, service_candidate},
    checkout::{CheckoutError, handoff, order_summary},
    fixtures::{CatalogFixture, FixtureError},
    items::{ItemKind, LineItem, NewItem, PetRef},
    pricing::{Priced, calculate_total, subtotal},
};
