//! # Catalog Operation Errors
//!
//! Error types for the admin service layer.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError (stockline-core)  ─┐                                  │
//! │                                     ├──► CatalogError ──► caller       │
//! │  DbError (stockline-db)            ─┘         │                        │
//! │                                               │                        │
//! │  PartialCascade is CatalogError's own: a rename updated the           │
//! │  reference table but failed on the dependent products. It is NEVER    │
//! │  folded into a generic persistence error, so the caller can tell      │
//! │  "nothing happened" apart from "half of it happened".                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use stockline_core::ValidationError;
use stockline_db::DbError;

/// Errors surfaced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Validation error (wraps ValidationError).
    ///
    /// Raised before any write; the store is untouched.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence error (wraps DbError).
    ///
    /// A single-statement operation failed; nothing partial to reconcile.
    #[error("Persistence error: {0}")]
    Db(#[from] DbError),

    /// A cascading rename was only partially applied.
    ///
    /// ## When This Occurs
    /// The reference row (`Brands`/`Type`) was already renamed when the
    /// dependent `Products` update failed. There is no rollback across
    /// statements: `applied` dependents carry the new name, the rest still
    /// carry the old one. Reconciliation is the caller's decision - retry
    /// the rename with the same arguments or rename back.
    #[error(
        "rename of {entity} '{old_name}' to '{new_name}' partially applied: \
         reference row updated, {applied} dependent product(s) patched before failure"
    )]
    PartialCascade {
        entity: &'static str,
        old_name: String,
        new_name: String,
        applied: u64,
        #[source]
        source: DbError,
    },

    /// A channel to the refresh agent is closed.
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_cascade_message_names_both_sides() {
        let err = CatalogError::PartialCascade {
            entity: "Brand",
            old_name: "Nike".to_string(),
            new_name: "Nyke".to_string(),
            applied: 2,
            source: DbError::PoolExhausted,
        };

        let msg = err.to_string();
        assert!(msg.contains("Nike"));
        assert!(msg.contains("Nyke"));
        assert!(msg.contains("2 dependent"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CatalogError = ValidationError::EmptyName { field: "name" }.into();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
