//! # Catalog Service
//!
//! The operations an admin session performs, one method per user action.
//!
//! ## Add Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Add Product Flow                                   │
//! │                                                                         │
//! │  Form submits ProductInput { base_label: "Air Max", brand: "Nike" ... }│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product_input ← label, prices, quantity                      │
//! │       │                                                                 │
//! │       ├── Sp > Mrp? → Error: PriceInvariant (NOTHING written)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products.next_id() ← 1 on empty table, max + 1 after                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compose_name("Nike", "Air Max") = "Nike Air Max"                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products.insert(row) → the realtime channel echoes an INSERT and      │
//! │                         the refresh agent reloads the listing          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validation runs before the first write; a rejected operation
//! leaves the store byte-for-byte unchanged. No operation retries on
//! failure - recovery is always the caller's call.

use tracing::info;

use stockline_core::{naming, validation, Brand, Product, ProductInput, ProductType};
use stockline_db::{Database, DbError};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Service
// =============================================================================

/// Service wrapping the repositories with catalog rules.
///
/// ## Usage
/// ```rust,ignore
/// let service = CatalogService::new(db);
///
/// let brand = service.add_brand("  nike  ").await?; // stored as "Nike"
/// let product = service.add_product(input).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    /// Creates a new CatalogService over a database handle.
    pub fn new(db: Database) -> Self {
        CatalogService { db }
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product.
    ///
    /// Validates the form payload, allocates the next id, composes the
    /// stored name from brand + base label, inserts.
    pub async fn add_product(&self, input: ProductInput) -> CatalogResult<Product> {
        validation::validate_product_input(&input)?;

        let id = self.db.products().next_id().await?;
        let product = input.into_product(id);

        let inserted = self.db.products().insert(&product).await?;
        info!(id = inserted.id, name = %inserted.name, "Product added");

        Ok(inserted)
    }

    /// Edits a product in place.
    ///
    /// The stored name is recomposed from the (possibly changed) brand and
    /// base label, so switching the brand re-prefixes the display name.
    pub async fn edit_product(&self, id: i64, input: ProductInput) -> CatalogResult<Product> {
        validation::validate_product_input(&input)?;

        let product = input.into_product(id);
        self.db.products().update(&product).await?;
        info!(id, name = %product.name, "Product updated");

        Ok(product)
    }

    /// Adjusts a product's stock by a signed delta.
    ///
    /// ## Floor Policy
    /// A delta that would take the quantity below zero is REJECTED with
    /// `NegativeQuantity` and the stored value stays untouched. Decrements
    /// are not clamped to zero.
    pub async fn adjust_quantity(&self, id: i64, delta: i64) -> CatalogResult<Product> {
        let mut product = self
            .db
            .products()
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::Db(DbError::not_found("Product", id)))?;

        let next = product.quantity + delta;
        validation::validate_quantity(next)?;

        self.db.products().set_quantity(id, next).await?;
        info!(id, quantity = next, "Quantity adjusted");

        product.quantity = next;
        Ok(product)
    }

    /// Deletes one product.
    pub async fn delete_product(&self, id: i64) -> CatalogResult<()> {
        self.db.products().delete(id).await?;
        info!(id, "Product deleted");
        Ok(())
    }

    /// Deletes a set of products. An empty set is a no-op.
    ///
    /// ## Returns
    /// Number of rows removed.
    pub async fn delete_products(&self, ids: &[i64]) -> CatalogResult<u64> {
        let deleted = self.db.products().delete_many(ids).await?;
        if deleted > 0 {
            info!(deleted, "Products deleted");
        }
        Ok(deleted)
    }

    // =========================================================================
    // Brands & Types
    // =========================================================================

    /// Adds a brand.
    ///
    /// The raw form input is normalized ("  NIKE air " → "Nike Air") and
    /// checked case-insensitively against existing brand names before the
    /// id is allocated.
    pub async fn add_brand(&self, raw_name: &str) -> CatalogResult<Brand> {
        let normalized = naming::normalize(raw_name);
        let existing = self.db.brands().names().await?;
        let name = naming::validate_unique(&normalized, &existing, None)?;
        validation::validate_reference_name(&name)?;

        let id = self.db.brands().next_id().await?;
        let brand = self.db.brands().insert(&Brand { id, name }).await?;
        info!(id = brand.id, name = %brand.name, "Brand added");

        Ok(brand)
    }

    /// Adds a product type. Same rules as [`Self::add_brand`].
    pub async fn add_type(&self, raw_name: &str) -> CatalogResult<ProductType> {
        let normalized = naming::normalize(raw_name);
        let existing = self.db.types().names().await?;
        let name = naming::validate_unique(&normalized, &existing, None)?;
        validation::validate_reference_name(&name)?;

        let id = self.db.types().next_id().await?;
        let product_type = self.db.types().insert(&ProductType { id, name }).await?;
        info!(id = product_type.id, name = %product_type.name, "Type added");

        Ok(product_type)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
