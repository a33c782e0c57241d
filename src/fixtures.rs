//! Fixtures
//!
//! Sample pet-shop catalog loaded from YAML, used by integration tests and
//! quick local experiments. Not part of the storefront runtime path.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::CatalogRecord;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading the fixture file.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// A catalog fixture: product and service records as the backend would
/// return them.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Product records.
    pub products: Vec<CatalogRecord>,

    /// Service records.
    pub services: Vec<CatalogRecord>,
}

impl CatalogFixture {
    /// Load a catalog fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = fs::read_to_string(path)?;

        Ok(serde_norway::from_str(&raw)?)
    }

    /// Load the catalog fixture shipped with the repository.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn shipped() -> Result<Self, FixtureError> {
        Self::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/catalog.yaml"))
    }

    /// Find a product record by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&CatalogRecord> {
        self.products.iter().find(|record| record.id == id)
    }

    /// Find a service record by id.
    #[must_use]
    pub fn service(&self, id: &str) -> Option<&CatalogRecord> {
        self.services.iter().find(|record| record.id == id)
    }
}
