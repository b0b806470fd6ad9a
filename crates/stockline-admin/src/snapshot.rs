//! # Catalog Snapshot
//!
//! The in-memory listing an admin session renders from. Owned by a single
//! session; reloaded wholesale by the refresh agent whenever the store
//! reports a change.

use stockline_core::{Brand, Product, ProductType};
use stockline_db::{Database, DbResult};

/// A point-in-time copy of all three catalog listings.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub brands: Vec<Brand>,
    pub types: Vec<ProductType>,
}

impl CatalogSnapshot {
    /// Loads a fresh snapshot: all three tables, in full.
    ///
    /// The three reads are separate statements; a listing fetched here can
    /// be momentarily ahead of or behind a concurrent writer. The refresh
    /// agent reloads on the next notification either way.
    pub async fn load(db: &Database) -> DbResult<Self> {
        Ok(CatalogSnapshot {
            products: db.products().list_all().await?,
            brands: db.brands().list_all().await?,
            types: db.types().list_all().await?,
        })
    }

    /// Case-insensitive product search across name, brand and type - the
    /// admin table's search box. A blank term matches everything.
    pub fn filter_products(&self, term: &str) -> Vec<&Product> {
        let term = term.trim();
        if term.is_empty() {
            return self.products.iter().collect();
        }

        self.products.iter().filter(|p| p.matches(term)).collect()
    }

    /// True when no listing holds any rows.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.brands.is_empty() && self.types.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::CatalogService;
    use stockline_core::ProductInput;
    use stockline_db::DbConfig;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = CatalogService::new(db.clone());

        let nike = service.add_brand("Nike").await.unwrap();
        let ty = service.add_type("Sneakers").await.unwrap();
        service
            .add_product(ProductInput {
                base_label: "Air Max".to_string(),
                brand_id: nike.id,
                brand_name: nike.name.clone(),
                type_id: ty.id,
                type_name: ty.name.clone(),
                image_url: None,
                mrp_paise: 899900,
                sp_paise: 799900,
                quantity: 3,
                size: None,
            })
            .await
            .unwrap();

        db
    }

    #[tokio::test]
    async fn test_load_pulls_all_listings() {
        let db = seeded_db().await;

        let snapshot = CatalogSnapshot::load(&db).await.unwrap();
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.brands.len(), 1);
        assert_eq!(snapshot.types.len(), 1);
        assert!(!snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_filter_products() {
        let db = seeded_db().await;
        let snapshot = CatalogSnapshot::load(&db).await.unwrap();

        assert_eq!(snapshot.filter_products("air").len(), 1);
        assert_eq!(snapshot.filter_products("NIKE").len(), 1);
        assert_eq!(snapshot.filter_products("sneak").len(), 1);
        assert_eq!(snapshot.filter_products("adidas").len(), 0);
        assert_eq!(snapshot.filter_products("  ").len(), 1); // blank = all
    }

    #[tokio::test]
    async fn test_default_is_empty() {
        assert!(CatalogSnapshot::default().is_empty());
    }
}
