//! # stockline-core: Pure Business Logic for Stockline
//!
//! This crate is the **heart** of the Stockline catalog backend. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockline Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Admin UI (TypeScript)                          │   │
//! │  │    Product Form ──► Product Table ──► Brand/Type Forms          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockline-admin                                │   │
//! │  │    add_product, rename_brand, adjust_quantity, refresh agent    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockline-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  naming   │  │   money   │  │ validation│  │   │
//! │  │   │  Product  │  │ normalize │  │   Money   │  │   rules   │  │   │
//! │  │   │   Brand   │  │  compose  │  │  (paise)  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockline-db (Database Layer)                  │   │
//! │  │            SQLite queries, migrations, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Brand, ProductType, ProductInput)
//! - [`naming`] - Name normalization and the product naming rule
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockline_core::naming::{compose_name, normalize};
//!
//! // Brand names are stored in canonical capitalization
//! assert_eq!(normalize("  NIKE  "), "Nike");
//!
//! // Products carry the brand name as a prefix of their stored name
//! assert_eq!(compose_name("Nike", "Air Max"), "Nike Air Max");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod naming;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockline_core::Money` instead of
// `use stockline_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a stored product name (brand prefix included)
///
/// Prevents pathological form input from blowing up table rendering.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a brand or type name
pub const MAX_REFERENCE_NAME_LEN: usize = 50;
