//! # Validation Module
//!
//! Input validation for catalog operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Admin UI (TypeScript)                                        │
//! │  ├── Basic format checks (empty, numeric fields)                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Price invariant, quantity floor, name rules                       │
//! │  └── Raised BEFORE any write - a failed validation writes nothing      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK (Sp <= Mrp), CHECK (Quantity >= 0)                          │
//! │  └── UNIQUE indexes (COLLATE NOCASE)                                   │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductInput;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_REFERENCE_NAME_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a base product label.
///
/// ## Rules
/// - Must not be blank after trimming
/// - Must leave room for the brand prefix in the composed name
pub fn validate_base_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::EmptyName { field: "product" });
    }

    if label.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            field: "product",
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a brand or type name's length.
///
/// Blankness and uniqueness are handled by [`crate::naming::validate_unique`];
/// this only guards the length bound.
pub fn validate_reference_name(name: &str) -> ValidationResult<()> {
    if name.trim().len() > MAX_REFERENCE_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            field: "name",
            max: MAX_REFERENCE_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the list/selling price pair.
///
/// ## Rules
/// - Neither price may be negative (zero is allowed - free items)
/// - The selling price must not exceed the list price
///
/// ## Example
/// ```rust
/// use stockline_core::validation::validate_prices;
///
/// assert!(validate_prices(8000, 8000).is_ok());
/// assert!(validate_prices(8000, 10000).is_err()); // Sp > Mrp
/// ```
pub fn validate_prices(mrp_paise: i64, sp_paise: i64) -> ValidationResult<()> {
    if mrp_paise < 0 {
        return Err(ValidationError::NegativePrice { field: "mrp" });
    }

    if sp_paise < 0 {
        return Err(ValidationError::NegativePrice {
            field: "selling price",
        });
    }

    if sp_paise > mrp_paise {
        return Err(ValidationError::PriceInvariant {
            mrp_paise,
            sp_paise,
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be zero or positive. There is no upper bound; the admin panel
///   restocks in arbitrary batches.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity {
            requested: quantity,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a full product form payload before any write.
///
/// Runs every field rule in order; the first violation wins.
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    validate_base_label(&input.base_label)?;
    validate_prices(input.mrp_paise, input.sp_paise)?;
    validate_quantity(input.quantity)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_label() {
        assert!(validate_base_label("Air Max").is_ok());
        assert!(validate_base_label("").is_err());
        assert!(validate_base_label("   ").is_err());
        assert!(validate_base_label(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_reference_name() {
        assert!(validate_reference_name("Nike").is_ok());
        assert!(validate_reference_name(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_prices() {
        assert!(validate_prices(8000, 7000).is_ok());
        assert!(validate_prices(8000, 8000).is_ok()); // equality allowed
        assert!(validate_prices(0, 0).is_ok()); // free item

        assert_eq!(
            validate_prices(8000, 10000).unwrap_err(),
            ValidationError::PriceInvariant {
                mrp_paise: 8000,
                sp_paise: 10000,
            }
        );
        assert!(validate_prices(-1, 0).is_err());
        assert!(validate_prices(100, -1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_product_input_order() {
        let input = ProductInput {
            base_label: "".to_string(),
            brand_id: 1,
            brand_name: "Nike".to_string(),
            type_id: 1,
            type_name: "Sneakers".to_string(),
            image_url: None,
            mrp_paise: 100,
            sp_paise: 200,
            quantity: -5,
            size: None,
        };

        // Label failure reported first, even though prices and quantity are
        // also invalid
        assert!(matches!(
            validate_product_input(&input),
            Err(ValidationError::EmptyName { .. })
        ));
    }
}
