//! Catalog
//!
//! Adapter between fetched catalog records and cart add-candidates. The cart
//! itself accepts anything; rejecting empty ids and non-positive prices is
//! this layer's job.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::items::{NewItem, PetRef};

/// Errors raised while adapting a catalog record into a cart candidate.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The record id was empty.
    #[error("catalog record has an empty id")]
    EmptyId,

    /// The record price was zero or negative.
    #[error("catalog record {0} has non-positive price {1}")]
    NonPositivePrice(String, Decimal),
}

/// A product or service record as fetched from the catalog.
///
/// The cart consumes only these three fields; everything else the backend
/// returns is dropped before it gets here.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogRecord {
    /// Opaque record identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,
}

impl CatalogRecord {
    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::EmptyId);
        }

        if self.price <= Decimal::ZERO {
            return Err(CatalogError::NonPositivePrice(
                self.id.clone(),
                self.price,
            ));
        }

        Ok(())
    }
}

/// Build a product add-candidate from a catalog record.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the record id is empty or the price is not
/// positive.
pub fn product_candidate(
    record: &CatalogRecord,
    quantity: Option<u32>,
) -> Result<NewItem, CatalogError> {
    record.validate()?;

    let mut candidate = NewItem::product(record.id.clone(), record.name.clone(), record.price);
    candidate.quantity = quantity;

    Ok(candidate)
}

/// Build a service add-candidate from a catalog record, scheduled for `pet`.
///
/// Pet existence is not checked here; the scheduling context owns that.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the record id is empty or the price is not
/// positive.
pub fn service_candidate(
    record: &CatalogRecord,
    pet: PetRef,
    quantity: Option<u32>,
) -> Result<NewItem, CatalogError> {
    record.validate()?;

    let mut candidate = NewItem::service(
        record.id.clone(),
        record.name.clone(),
        record.price,
        pet,
    );
    candidate.quantity = quantity;

    Ok(candidate)
}
