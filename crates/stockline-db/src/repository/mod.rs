//! # Repository Module
//!
//! Database repository implementations for the Stockline catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  CatalogService                                                        │
//! │       │                                                                 │
//! │       │  db.products().list_all()                                      │
//! │       │  db.brands().rename("Nike", "Nyke")                            │
//! │       ▼                                                                 │
//! │  ProductRepository / BrandRepository / TypeRepository                  │
//! │       │                                                                 │
//! │       │  SQL over the shared pool                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Each method is a single statement that commits independently; no      │
//! │  cross-statement transactions are assumed by callers.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD, quantity, bulk delete
//! - [`brand::BrandRepository`] - Brand reference rows and renames
//! - [`product_type::TypeRepository`] - Product type reference rows

pub mod brand;
pub mod product;
pub mod product_type;
