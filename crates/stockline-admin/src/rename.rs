//! # Cascading Rename Coordinator
//!
//! Propagates a brand/type rename from the reference table to every product
//! row carrying the old denormalized name.
//!
//! ## Rename Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 rename_brand("Nike", "Nyke")                            │
//! │                                                                         │
//! │  Idle                                                                   │
//! │   │                                                                     │
//! │   ▼                                                                     │
//! │  Validating ── duplicate/blank? ──► Failed(DuplicateName|EmptyName)    │
//! │   │                                 (nothing written)                   │
//! │   ▼                                                                     │
//! │  UpdatingReference ── db error? ──► Failed(Db)                         │
//! │   │   Brands: "Nike" → "Nyke"       (nothing written)                  │
//! │   ▼                                                                     │
//! │  UpdatingDependents ─ db error? ──► Failed(PartialCascade)             │
//! │   │   per product:                  (reference row ALREADY renamed,    │
//! │   │   Brand  = "Nyke"                first N dependents patched -      │
//! │   │   Product= "Nyke Air Max"        no rollback, caller reconciles)   │
//! │   ▼                                                                     │
//! │  Done                                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dependent update for a brand recomposes each product's stored
//! display name as well as the raw brand field: the denormalized copies are
//! a derived cache, refreshed inside the same logical operation that
//! renames the brand. Type renames only touch the raw `Type` field - type
//! names never participate in the composed product name.
//!
//! There is no transaction across the two tables; each statement commits on
//! its own, and a failure between them surfaces as the distinct
//! `PartialCascade` error.

use tracing::{info, warn};

use stockline_core::{naming, validation};

use crate::error::{CatalogError, CatalogResult};
use crate::service::CatalogService;

impl CatalogService {
    /// Renames a brand and cascades the change to all dependent products.
    ///
    /// ## Returns
    /// Number of product rows patched.
    ///
    /// ## Errors
    /// - `Validation(DuplicateName)` - `new_name` collides with another
    ///   brand (case-insensitive; the brand being renamed doesn't count)
    /// - `Db(NotFound)` - no brand stored under `old_name`
    /// - `PartialCascade` - the Brands row was renamed but patching the
    ///   products failed partway
    pub async fn rename_brand(&self, old_name: &str, new_name: &str) -> CatalogResult<u64> {
        // Validating
        let normalized = naming::normalize(new_name);
        let existing = self.database().brands().names().await?;
        let new_name = naming::validate_unique(&normalized, &existing, Some(old_name))?;
        validation::validate_reference_name(&new_name)?;

        // UpdatingReference
        self.database().brands().rename(old_name, &new_name).await?;

        // UpdatingDependents: per-row so each composed name can be rebuilt
        let dependents = match self.database().products().list_by_brand(old_name).await {
            Ok(rows) => rows,
            Err(source) => {
                warn!(old = %old_name, new = %new_name, "Brand renamed but dependents unreadable");
                return Err(CatalogError::PartialCascade {
                    entity: "Brand",
                    old_name: old_name.to_string(),
                    new_name,
                    applied: 0,
                    source,
                });
            }
        };

        let mut applied = 0u64;
        for product in &dependents {
            let base = naming::decompose_name(&product.name, old_name);
            let recomposed = naming::compose_name(&new_name, &base);

            if let Err(source) = self
                .database()
                .products()
                .update_branding(product.id, &new_name, &recomposed)
                .await
            {
                warn!(
                    old = %old_name,
                    new = %new_name,
                    applied,
                    remaining = dependents.len() as u64 - applied,
                    "Brand rename cascade failed partway"
                );
                return Err(CatalogError::PartialCascade {
                    entity: "Brand",
                    old_name: old_name.to_string(),
                    new_name,
                    applied,
                    source,
                });
            }

            applied += 1;
        }

        info!(old = %old_name, new = %new_name, applied, "Brand renamed");
        Ok(applied)
    }

    /// Renames a product type and cascades the change to all dependent
    /// products. Identical shape to [`Self::rename_brand`], except the
    /// dependent update is a single bulk statement - the type name is not
    /// part of the composed product name.
    ///
    /// ## Returns
    /// Number of product rows updated.
    pub async fn rename_type(&self, old_name: &str, new_name: &str) -> CatalogResult<u64> {
        // Validating
        let normalized = naming::normalize(new_name);
        let existing = self.database().types().names().await?;
        let new_name = naming::validate_unique(&normalized, &existing, Some(old_name))?;
        validation::validate_reference_name(&new_name)?;

        // UpdatingReference
        self.database().types().rename(old_name, &new_name).await?;

        // UpdatingDependents
        let applied = match self
            .database()
            .products()
            .update_type_name(old_name, &new_name)
            .await
        {
            Ok(rows) => rows,
            Err(source) => {
                warn!(old = %old_name, new = %new_name, "Type renamed but product cascade failed");
                return Err(CatalogError::PartialCascade {
                    entity: "Type",
                    old_name: old_name.to_string(),
                    new_name,
                    applied: 0,
                    source,
                });
            }
        };

        info!(old = %old_name, new = %new_name, applied, "Type renamed");
        Ok(applied)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
