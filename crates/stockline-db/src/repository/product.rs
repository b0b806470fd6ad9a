//! # Product Repository
//!
//! Database operations for the Products table.
//!
//! ## Column Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │          Products table            →        Product struct             │
//! │                                                                         │
//! │   Pid        INTEGER PRIMARY KEY   →   id                               │
//! │   Product    TEXT                  →   name (composed, brand-prefixed)  │
//! │   Type       TEXT                  →   type_name (denormalized)         │
//! │   Tid        INTEGER               →   type_id                          │
//! │   ProductImg TEXT NULL             →   image_url                        │
//! │   Mrp        INTEGER (paise)       →   mrp_paise                        │
//! │   Sp         INTEGER (paise)       →   sp_paise                         │
//! │   Brand      TEXT                  →   brand_name (denormalized)        │
//! │   Bid        INTEGER               →   brand_id                         │
//! │   Quantity   INTEGER               →   quantity                         │
//! │   Size       TEXT NULL             →   size                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The legacy column names are kept verbatim in the schema; the aliases in
//! the SELECT list translate them to the struct's field names for FromRow.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockline_core::Product;

/// Shared SELECT list translating legacy column names to struct fields.
const PRODUCT_COLUMNS: &str = "\
    Pid        AS id, \
    Product    AS name, \
    Type       AS type_name, \
    Tid        AS type_id, \
    ProductImg AS image_url, \
    Mrp        AS mrp_paise, \
    Sp         AS sp_paise, \
    Brand      AS brand_name, \
    Bid        AS brand_id, \
    Quantity   AS quantity, \
    Size       AS size";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let id = repo.next_id().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Allocates the next product id.
    ///
    /// ## Semantics
    /// - Empty table ⇒ 1
    /// - Otherwise ⇒ max(Pid) + 1 (no gap reuse)
    ///
    /// Concurrent allocations are NOT serialized; two racing callers can
    /// read the same maximum. The unique primary key turns that race into
    /// a `UniqueViolation` on insert instead of silent corruption.
    pub async fn next_id(&self) -> DbResult<i64> {
        let id: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(Pid), 0) + 1 FROM Products")
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Lists every product, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM Products ORDER BY Pid");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM Products WHERE Pid = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Lists the products carrying a given denormalized brand name.
    ///
    /// Used by the cascading brand rename, which has to recompose each
    /// stored name individually.
    pub async fn list_by_brand(&self, brand_name: &str) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM Products WHERE Brand = ?1 ORDER BY Pid");

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(brand_name)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Arguments
    /// * `product` - Product to insert (id must be allocated beforehand)
    ///
    /// ## Returns
    /// * `Ok(Product)` - The inserted row
    /// * `Err(DbError::UniqueViolation)` - Pid already exists (lost
    ///   allocation race)
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(id = product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO Products (
                Pid, Product, Type, Tid, ProductImg,
                Mrp, Sp, Brand, Bid, Quantity, Size
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.type_name)
        .bind(product.type_id)
        .bind(&product.image_url)
        .bind(product.mrp_paise)
        .bind(product.sp_paise)
        .bind(&product.brand_name)
        .bind(product.brand_id)
        .bind(product.quantity)
        .bind(&product.size)
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    /// Updates an existing product (full row by id).
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE Products SET
                Product = ?2,
                Type = ?3,
                Tid = ?4,
                ProductImg = ?5,
                Mrp = ?6,
                Sp = ?7,
                Brand = ?8,
                Bid = ?9,
                Quantity = ?10,
                Size = ?11
            WHERE Pid = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.type_name)
        .bind(product.type_id)
        .bind(&product.image_url)
        .bind(product.mrp_paise)
        .bind(product.sp_paise)
        .bind(&product.brand_name)
        .bind(product.brand_id)
        .bind(product.quantity)
        .bind(&product.size)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    /// Sets the stock quantity of a product.
    ///
    /// The floor check (no negative stock) happens in the service layer
    /// before this runs; the schema CHECK is the backstop.
    pub async fn set_quantity(&self, id: i64, quantity: i64) -> DbResult<()> {
        debug!(id, quantity, "Setting product quantity");

        let result = sqlx::query("UPDATE Products SET Quantity = ?2 WHERE Pid = ?1")
            .bind(id)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Replaces the denormalized type name on every matching product.
    ///
    /// ## Returns
    /// Number of rows updated (0 is fine - no product uses the type yet).
    pub async fn update_type_name(&self, old_name: &str, new_name: &str) -> DbResult<u64> {
        debug!(old = %old_name, new = %new_name, "Cascading type rename to products");

        let result = sqlx::query("UPDATE Products SET Type = ?2 WHERE Type = ?1")
            .bind(old_name)
            .bind(new_name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Patches one product's denormalized brand name and its composed
    /// display name in a single statement.
    ///
    /// The brand cascade walks the affected rows and recomposes each name,
    /// so this is a per-row patch rather than a bulk update-where.
    pub async fn update_branding(&self, id: i64, brand_name: &str, name: &str) -> DbResult<()> {
        let result = sqlx::query("UPDATE Products SET Brand = ?2, Product = ?3 WHERE Pid = ?1")
            .bind(id)
            .bind(brand_name)
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product by id.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM Products WHERE Pid = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a set of products by id.
    ///
    /// ## Semantics
    /// - Removes exactly the listed ids, nothing else
    /// - An empty set is a no-op: no statement is issued
    /// - Ids that don't exist are silently skipped
    ///
    /// ## Returns
    /// Number of rows actually deleted.
    pub async fn delete_many(&self, ids: &[i64]) -> DbResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        debug!(count = ids.len(), "Bulk deleting products");

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM Products WHERE Pid IN ({placeholders})");

        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(*id);
        }

        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Counts products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn product(id: i64, brand: &str, base: &str) -> Product {
        Product {
            id,
            name: format!("{brand} {base}"),
            type_name: "Sneakers".to_string(),
            type_id: 1,
            image_url: None,
            mrp_paise: 899900,
            sp_paise: 699900,
            brand_name: brand.to_string(),
            brand_id: 1,
            quantity: 5,
            size: None,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_next_id_empty_table() {
        let db = test_db().await;
        assert_eq!(db.products().next_id().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_next_id_is_max_plus_one() {
        let db = test_db().await;
        let repo = db.products();

        for id in [3, 7, 2] {
            repo.insert(&product(id, "Nike", "Air Max")).await.unwrap();
        }

        assert_eq!(repo.next_id().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();

        let fetched = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Nike Air Max");
        assert_eq!(fetched.brand_name, "Nike");
        assert_eq!(fetched.quantity, 5);

        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();
        let err = repo.insert(&product(1, "Puma", "Suede")).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_full_row() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();

        let mut edited = product(1, "Nike", "Air Max 90");
        edited.quantity = 12;
        repo.update(&edited).await.unwrap();

        let fetched = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Nike Air Max 90");
        assert_eq!(fetched.quantity, 12);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let db = test_db().await;
        let err = db.products().update(&product(42, "Nike", "Air Max")).await;
        assert!(matches!(err, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_set_quantity() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();
        repo.set_quantity(1, 0).await.unwrap();

        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_schema_check_rejects_negative_quantity() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();

        // The service layer rejects this first; the schema CHECK is the
        // backstop when it is bypassed
        assert!(repo.set_quantity(1, -1).await.is_err());
        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn test_update_type_name_cascade() {
        let db = test_db().await;
        let repo = db.products();

        let mut a = product(1, "Nike", "Air Max");
        a.type_name = "Shoes".to_string();
        let mut b = product(2, "Puma", "Suede");
        b.type_name = "Shoes".to_string();
        let mut c = product(3, "Nike", "Tee");
        c.type_name = "Apparel".to_string();

        for p in [&a, &b, &c] {
            repo.insert(p).await.unwrap();
        }

        let updated = repo.update_type_name("Shoes", "Footwear").await.unwrap();
        assert_eq!(updated, 2);

        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().type_name, "Footwear");
        assert_eq!(repo.get_by_id(3).await.unwrap().unwrap().type_name, "Apparel");
    }

    #[tokio::test]
    async fn test_list_by_brand() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();
        repo.insert(&product(2, "Puma", "Suede")).await.unwrap();
        repo.insert(&product(3, "Nike", "Pegasus")).await.unwrap();

        let nikes = repo.list_by_brand("Nike").await.unwrap();
        assert_eq!(nikes.len(), 2);
        assert!(nikes.iter().all(|p| p.brand_name == "Nike"));
    }

    #[tokio::test]
    async fn test_delete_many_exact_set() {
        let db = test_db().await;
        let repo = db.products();

        for id in 1..=5 {
            repo.insert(&product(id, "Nike", "Air Max")).await.unwrap();
        }

        let deleted = repo.delete_many(&[1, 2, 3]).await.unwrap();
        assert_eq!(deleted, 3);

        let remaining = repo.list_all().await.unwrap();
        let ids: Vec<i64> = remaining.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_delete_many_empty_set_is_noop() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&product(1, "Nike", "Air Max")).await.unwrap();

        assert_eq!(repo.delete_many(&[]).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
