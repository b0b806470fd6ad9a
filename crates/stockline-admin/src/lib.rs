//! # stockline-admin: Catalog Operations for Stockline
//!
//! The surface an admin UI session calls into. One method per user action,
//! plus the machinery that keeps the session's listing in sync with the
//! store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockline Admin Flow                              │
//! │                                                                         │
//! │  Admin UI action (submit form, click +/-, rename brand)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockline-admin (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐ │   │
//! │  │   │CatalogService│  │ rename       │  │ RefreshAgent         │ │   │
//! │  │   │ add_product  │  │ coordinator  │  │  events → one reload │ │   │
//! │  │   │ add_brand    │  │ rename_brand │  │ CatalogSnapshot      │ │   │
//! │  │   │ adjust_qty   │  │ rename_type  │  │  products/brands/    │ │   │
//! │  │   │ delete_*     │  │ (cascading)  │  │  types listing       │ │   │
//! │  │   └──────────────┘  └──────────────┘  └──────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                              ▲                  │
//! │       ▼                                              │ change events    │
//! │  stockline-db ──────────────► backing store ─────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - [`CatalogService`]: add/edit/delete products, quantity
//!   adjustment, add brand/type
//! - [`rename`] - cascading rename coordinator (impl block on the service)
//! - [`snapshot`] - [`CatalogSnapshot`]: the in-memory listing
//! - [`refresh`] - [`RefreshAgent`]/[`RefreshHandle`]: change-notification
//!   bridge
//! - [`event`] - [`ChangeEvent`] wire types
//! - [`error`] - [`CatalogError`], including the distinct partial-cascade
//!   failure

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod event;
pub mod refresh;
pub mod rename;
pub mod service;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use event::{CatalogTable, ChangeEvent, ChangeKind};
pub use refresh::{RefreshAgent, RefreshHandle};
pub use service::CatalogService;
pub use snapshot::CatalogSnapshot;
