//! # Domain Types
//!
//! Core domain types used throughout Stockline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Brand       │   │  ProductType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name (composed)│   │  name (unique-  │   │  name (unique-  │       │
//! │  │  brand_name ────┼──►│        ci)      │   │        ci)      │       │
//! │  │  type_name  ────┼───┼─────────────────┼──►│                 │       │
//! │  │  mrp/sp (paise) │   └─────────────────┘   └─────────────────┘       │
//! │  │  quantity       │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Product carries DENORMALIZED copies of the brand and type names, not  │
//! │  just the foreign keys. A rename of a Brand/ProductType must propagate │
//! │  to every Product row holding the old name.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity has an application-allocated integer id: the first row of a
//! table gets 1, later rows get `max + 1` (see the repository layer).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::naming;

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// The stored `name` is composed: the brand name followed by the base
/// product label ("Nike Air Max"). `brand_name`/`type_name` are denormalized
/// copies of the reference tables, kept in sync by the cascading rename
/// coordinator in stockline-admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (allocated integer, `Pid` column).
    pub id: i64,

    /// Composed display name: brand prefix + base label.
    pub name: String,

    /// Denormalized copy of the product type name.
    pub type_name: String,

    /// Foreign key into the Type table.
    pub type_id: i64,

    /// Optional image URL shown in the admin table.
    pub image_url: Option<String>,

    /// List price (MRP) in paise.
    pub mrp_paise: i64,

    /// Selling price in paise. Invariant: `sp_paise <= mrp_paise`.
    pub sp_paise: i64,

    /// Denormalized copy of the brand name.
    pub brand_name: String,

    /// Foreign key into the Brands table.
    pub brand_id: i64,

    /// Units in stock. Invariant: never negative.
    pub quantity: i64,

    /// Optional size label ("UK 9", "XL", ...).
    pub size: Option<String>,
}

impl Product {
    /// Returns the list price as a Money type.
    #[inline]
    pub fn mrp(&self) -> Money {
        Money::from_paise(self.mrp_paise)
    }

    /// Returns the selling price as a Money type.
    #[inline]
    pub fn sp(&self) -> Money {
        Money::from_paise(self.sp_paise)
    }

    /// Recovers the base label by stripping the brand prefix from the
    /// stored name.
    pub fn base_label(&self) -> String {
        naming::decompose_name(&self.name, &self.brand_name)
    }

    /// Case-insensitive search across name, brand and type, matching the
    /// admin table's search box.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.brand_name.to_lowercase().contains(&term)
            || self.type_name.to_lowercase().contains(&term)
    }
}

// =============================================================================
// Brand
// =============================================================================

/// A brand reference row. Names are unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique identifier (allocated integer, `Bid` column).
    pub id: i64,

    /// Canonical brand name.
    pub name: String,
}

// =============================================================================
// Product Type
// =============================================================================

/// A product type reference row. Same lifecycle shape as [`Brand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    /// Unique identifier (allocated integer, `Tid` column).
    pub id: i64,

    /// Canonical type name.
    pub name: String,
}

// =============================================================================
// Product Input
// =============================================================================

/// The un-composed form payload for adding or editing a product.
///
/// Carries the base label separately from the brand selection; the service
/// layer composes the stored name (`compose_name(brand_name, base_label)`)
/// after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Base product label without the brand prefix ("Air Max").
    pub base_label: String,

    /// Selected brand.
    pub brand_id: i64,
    pub brand_name: String,

    /// Selected product type.
    pub type_id: i64,
    pub type_name: String,

    /// Optional image URL.
    pub image_url: Option<String>,

    /// List price (MRP) in paise.
    pub mrp_paise: i64,

    /// Selling price in paise.
    pub sp_paise: i64,

    /// Initial or edited stock level.
    pub quantity: i64,

    /// Optional size label.
    pub size: Option<String>,
}

impl ProductInput {
    /// Composes the stored product name for this input.
    pub fn composed_name(&self) -> String {
        naming::compose_name(&self.brand_name, self.base_label.trim())
    }

    /// Materializes a full row under the given allocated id.
    pub fn into_product(self, id: i64) -> Product {
        let name = self.composed_name();
        Product {
            id,
            name,
            type_name: self.type_name,
            type_id: self.type_id,
            image_url: self.image_url,
            mrp_paise: self.mrp_paise,
            sp_paise: self.sp_paise,
            brand_name: self.brand_name,
            brand_id: self.brand_id,
            quantity: self.quantity,
            size: self.size,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
