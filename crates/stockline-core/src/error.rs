//! # Error Types
//!
//! Domain-specific error types for stockline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockline-core errors (this file)                                     │
//! │  └── ValidationError  - Input and invariant validation failures        │
//! │                                                                         │
//! │  stockline-db errors (separate crate)                                  │
//! │  └── DbError          - Persistence failures (wraps sqlx)              │
//! │                                                                         │
//! │  stockline-admin errors (separate crate)                               │
//! │  └── CatalogError     - Operation-level errors, incl. partial cascade  │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → caller                         │
//! │        DbError         → CatalogError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every validation error is raised BEFORE any write happens

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input and invariant validation errors.
///
/// These errors occur when user input doesn't meet catalog rules. They are
/// detected before any persistence call runs, so a failed validation never
/// leaves partial state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required name is missing or blank after trimming.
    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },

    /// A brand or type name collides case-insensitively with an existing one.
    #[error("'{value}' already exists")]
    DuplicateName { value: String },

    /// Name exceeds the allowed length.
    #[error("{field} must be at most {max} characters")]
    NameTooLong { field: &'static str, max: usize },

    /// Selling price exceeds the list price.
    ///
    /// ## When This Occurs
    /// - Adding a product with Sp > Mrp
    /// - Editing either price so the pair would cross
    #[error("selling price {sp_paise} exceeds list price {mrp_paise} (paise)")]
    PriceInvariant { mrp_paise: i64, sp_paise: i64 },

    /// A price is negative.
    #[error("{field} must not be negative")]
    NegativePrice { field: &'static str },

    /// A quantity change would take stock below zero.
    ///
    /// Decrements are rejected, never clamped: a decrement from 0 fails and
    /// the stored quantity stays untouched.
    #[error("quantity cannot go below zero (requested {requested})")]
    NegativeQuantity { requested: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::EmptyName { field: "brand" };
        assert_eq!(err.to_string(), "brand must not be empty");

        let err = ValidationError::DuplicateName {
            value: "Nike".to_string(),
        };
        assert_eq!(err.to_string(), "'Nike' already exists");
    }

    #[test]
    fn test_price_invariant_message() {
        let err = ValidationError::PriceInvariant {
            mrp_paise: 8000,
            sp_paise: 10000,
        };
        assert_eq!(
            err.to_string(),
            "selling price 10000 exceeds list price 8000 (paise)"
        );
    }

    #[test]
    fn test_negative_quantity_message() {
        let err = ValidationError::NegativeQuantity { requested: -1 };
        assert_eq!(
            err.to_string(),
            "quantity cannot go below zero (requested -1)"
        );
    }
}
