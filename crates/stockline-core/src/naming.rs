//! # Naming Module
//!
//! Name normalization for brands/types and the product naming rule.
//!
//! ## The Product Naming Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              How Product Names Are Stored                               │
//! │                                                                         │
//! │  Form input:   brand = "Nike"     base label = "Air Max"               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compose_name("Nike", "Air Max")                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stored Products.Product = "Nike Air Max"   ← brand is a prefix        │
//! │                                                                         │
//! │  Changing the brand reverses the rule first:                           │
//! │                                                                         │
//! │  decompose_name("Nike Air Max", "Nike") = "Air Max"                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compose_name("Adidas", "Air Max") = "Adidas Air Max"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The decomposition is string-based and removes only the FIRST occurrence
//! of the brand. A base label that itself contains the brand name as a
//! substring is therefore ambiguous; callers get the first-match behavior.
//!
//! ## Canonical Capitalization
//! Brand and type names are stored in a single canonical form so that
//! "NIKE", "nike" and "Nike" all refer to one brand. [`normalize`] produces
//! that form; [`validate_unique`] enforces the case-insensitive uniqueness
//! rule before any insert or rename.

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes a brand or type name into its canonical capitalization.
///
/// Trims the input, lowercases it, then upper-cases the first letter of each
/// whitespace-separated word. Interior runs of whitespace collapse to a
/// single space.
///
/// ## Example
/// ```rust
/// use stockline_core::naming::normalize;
///
/// assert_eq!(normalize("nike air"), "Nike Air");
/// assert_eq!(normalize("  ADIDAS  "), "Adidas");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks whether `name` already appears in `existing`, ignoring case.
pub fn name_exists<S: AsRef<str>>(name: &str, existing: &[S]) -> bool {
    let lowered = name.to_lowercase();
    existing
        .iter()
        .any(|candidate| candidate.as_ref().to_lowercase() == lowered)
}

/// Validates that a name is non-blank and unique among `existing`.
///
/// ## Rules
/// - Input is trimmed first; a blank result fails with `EmptyName`
/// - Uniqueness is case-insensitive: "nike" collides with "Nike"
/// - `excluding` skips one entry, used during rename so the row being
///   renamed does not collide with itself
///
/// ## Returns
/// The trimmed name on success.
///
/// ## Example
/// ```rust
/// use stockline_core::naming::validate_unique;
///
/// assert!(validate_unique("Nike", &["nike", "Puma"], None).is_err());
/// assert!(validate_unique("Nike", &["Puma"], None).is_ok());
/// assert!(validate_unique("NIKE", &["Nike", "Puma"], Some("Nike")).is_ok());
/// ```
pub fn validate_unique<S: AsRef<str>>(
    name: &str,
    existing: &[S],
    excluding: Option<&str>,
) -> ValidationResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName { field: "name" });
    }

    let lowered = trimmed.to_lowercase();
    let excluded = excluding.map(|e| e.to_lowercase());

    let collides = existing.iter().any(|candidate| {
        let candidate = candidate.as_ref().to_lowercase();
        if Some(&candidate) == excluded.as_ref() {
            return false;
        }
        candidate == lowered
    });

    if collides {
        return Err(ValidationError::DuplicateName {
            value: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

// =============================================================================
// Product Naming Rule
// =============================================================================

/// Composes the stored product name from a brand name and a base label.
///
/// The base label may be empty, in which case the result is just the brand.
///
/// ## Example
/// ```rust
/// use stockline_core::naming::compose_name;
///
/// assert_eq!(compose_name("Nike", "Air Max"), "Nike Air Max");
/// assert_eq!(compose_name("Nike", ""), "Nike");
/// ```
pub fn compose_name(brand: &str, base_label: &str) -> String {
    format!("{} {}", brand, base_label).trim().to_string()
}

/// Recovers the base label from a stored product name by removing the first
/// occurrence of the brand name and trimming the remainder.
///
/// If the brand does not occur in the name, the trimmed name is returned
/// unchanged. When the base label itself contains the brand as a substring
/// only the first match is removed (see module docs).
///
/// ## Example
/// ```rust
/// use stockline_core::naming::decompose_name;
///
/// assert_eq!(decompose_name("Nike Air Max", "Nike"), "Air Max");
/// assert_eq!(decompose_name("Nike", "Nike"), "");
/// ```
pub fn decompose_name(full_name: &str, brand: &str) -> String {
    if brand.is_empty() {
        return full_name.trim().to_string();
    }

    match full_name.find(brand) {
        Some(pos) => {
            let mut remainder = String::with_capacity(full_name.len() - brand.len());
            remainder.push_str(&full_name[..pos]);
            remainder.push_str(&full_name[pos + brand.len()..]);
            remainder.trim().to_string()
        }
        None => full_name.trim().to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_capitalizes_each_word() {
        assert_eq!(normalize("nike air"), "Nike Air");
        assert_eq!(normalize("RUNNING SHOES"), "Running Shoes");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  ADIDAS  "), "Adidas");
        assert_eq!(normalize("\tpuma\n"), "Puma");
    }

    #[test]
    fn test_normalize_collapses_interior_whitespace() {
        assert_eq!(normalize("new   balance"), "New Balance");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_name_exists_ignores_case() {
        assert!(name_exists("NIKE", &["nike", "Puma"]));
        assert!(name_exists("puma", &["Nike", "Puma"]));
        assert!(!name_exists("Asics", &["Nike", "Puma"]));
    }

    #[test]
    fn test_validate_unique_detects_collision() {
        let err = validate_unique("Nike", &["nike", "Puma"], None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateName {
                value: "Nike".to_string()
            }
        );
    }

    #[test]
    fn test_validate_unique_passes_fresh_name() {
        assert_eq!(
            validate_unique("Nike", &["Puma"], None).unwrap(),
            "Nike".to_string()
        );
    }

    #[test]
    fn test_validate_unique_trims_and_rejects_blank() {
        assert_eq!(validate_unique("  Nike  ", &["Puma"], None).unwrap(), "Nike");
        assert!(matches!(
            validate_unique("   ", &["Puma"], None),
            Err(ValidationError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_validate_unique_excluding_self() {
        // Renaming "Nike" to "NIKE" must not collide with itself...
        assert!(validate_unique("NIKE", &["Nike", "Puma"], Some("Nike")).is_ok());
        // ...but still collides with everything else
        assert!(validate_unique("Puma", &["Nike", "Puma"], Some("Nike")).is_err());
    }

    #[test]
    fn test_compose_name() {
        assert_eq!(compose_name("Nike", "Air Max"), "Nike Air Max");
        assert_eq!(compose_name("Nike", ""), "Nike");
        assert_eq!(compose_name("", "Air Max"), "Air Max");
    }

    #[test]
    fn test_decompose_name() {
        assert_eq!(decompose_name("Nike Air Max", "Nike"), "Air Max");
        assert_eq!(decompose_name("Nike", "Nike"), "");
        assert_eq!(decompose_name("Air Max", "Nike"), "Air Max");
    }

    #[test]
    fn test_decompose_removes_first_occurrence_only() {
        assert_eq!(decompose_name("Nike Court Nike", "Nike"), "Court Nike");
    }

    #[test]
    fn test_compose_decompose_round_trip() {
        // Holds for non-empty bases that do not contain the brand
        for (brand, base) in [
            ("Nike", "Air Max"),
            ("Adidas", "Ultraboost 22"),
            ("New Balance", "574"),
        ] {
            let stored = compose_name(brand, base);
            let recovered = decompose_name(&stored, brand);
            assert_eq!(compose_name(brand, &recovered), stored);
            assert_eq!(recovered, base);
        }
    }
}
