//! Pawcart
//!
//! Pawcart is the in-memory shopping cart and pricing core of a pet-care
//! storefront: line items for products and pet services keyed by a composite
//! `(catalog id, pet id)` identity, merge-on-add semantics, and a standalone
//! discount-aware total calculator. Screens, networking and authentication
//! live elsewhere; this crate is the piece with an actual contract.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
