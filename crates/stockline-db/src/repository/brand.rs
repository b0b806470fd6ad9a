//! # Brand Repository
//!
//! Database operations for the Brands reference table.
//!
//! Brand names are unique case-insensitively (enforced by a COLLATE NOCASE
//! index); the service layer validates uniqueness before inserts and
//! renames, so a `UniqueViolation` from here means a racing writer got in
//! between.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockline_core::Brand;

/// Repository for brand database operations.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    pool: SqlitePool,
}

impl BrandRepository {
    /// Creates a new BrandRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BrandRepository { pool }
    }

    /// Allocates the next brand id: 1 on an empty table, max + 1 after.
    pub async fn next_id(&self) -> DbResult<i64> {
        let id: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(Bid), 0) + 1 FROM Brands")
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Lists every brand, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Brand>> {
        let brands =
            sqlx::query_as::<_, Brand>("SELECT Bid AS id, Brand AS name FROM Brands ORDER BY Bid")
                .fetch_all(&self.pool)
                .await?;

        Ok(brands)
    }

    /// Lists just the brand names (for uniqueness validation).
    pub async fn names(&self) -> DbResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT Brand FROM Brands ORDER BY Bid")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    /// Gets a brand by its exact stored name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Brand>> {
        let brand =
            sqlx::query_as::<_, Brand>("SELECT Bid AS id, Brand AS name FROM Brands WHERE Brand = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(brand)
    }

    /// Inserts a new brand.
    ///
    /// ## Returns
    /// * `Ok(Brand)` - The inserted row
    /// * `Err(DbError::UniqueViolation)` - Name already exists (any casing)
    pub async fn insert(&self, brand: &Brand) -> DbResult<Brand> {
        debug!(id = brand.id, name = %brand.name, "Inserting brand");

        sqlx::query("INSERT INTO Brands (Bid, Brand) VALUES (?1, ?2)")
            .bind(brand.id)
            .bind(&brand.name)
            .execute(&self.pool)
            .await?;

        Ok(brand.clone())
    }

    /// Renames a brand, matching on the old name.
    ///
    /// This is the reference-table half of the cascading rename; the
    /// coordinator in stockline-admin follows up on the Products table.
    ///
    /// ## Returns
    /// * `Ok(())` - Row renamed
    /// * `Err(DbError::NotFound)` - No brand stored under `old_name`
    pub async fn rename(&self, old_name: &str, new_name: &str) -> DbResult<()> {
        debug!(old = %old_name, new = %new_name, "Renaming brand");

        let result = sqlx::query("UPDATE Brands SET Brand = ?2 WHERE Brand = ?1")
            .bind(old_name)
            .bind(new_name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Brand", old_name));
        }

        Ok(())
    }

    /// Deletes a brand by id.
    ///
    /// Products keep their denormalized copy of the name; deleting a brand
    /// does not touch them.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM Brands WHERE Bid = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Brand", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_next_id() {
        let db = test_db().await;
        let repo = db.brands();

        assert_eq!(repo.next_id().await.unwrap(), 1);

        repo.insert(&Brand { id: 4, name: "Nike".to_string() })
            .await
            .unwrap();

        assert_eq!(repo.next_id().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = test_db().await;
        let repo = db.brands();

        repo.insert(&Brand { id: 1, name: "Nike".to_string() })
            .await
            .unwrap();
        repo.insert(&Brand { id: 2, name: "Puma".to_string() })
            .await
            .unwrap();

        let names = repo.names().await.unwrap();
        assert_eq!(names, vec!["Nike".to_string(), "Puma".to_string()]);
    }

    #[tokio::test]
    async fn test_case_insensitive_unique_index() {
        let db = test_db().await;
        let repo = db.brands();

        repo.insert(&Brand { id: 1, name: "Nike".to_string() })
            .await
            .unwrap();

        let err = repo
            .insert(&Brand { id: 2, name: "NIKE".to_string() })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_rename() {
        let db = test_db().await;
        let repo = db.brands();

        repo.insert(&Brand { id: 1, name: "Nike".to_string() })
            .await
            .unwrap();

        repo.rename("Nike", "Nyke").await.unwrap();
        assert!(repo.get_by_name("Nyke").await.unwrap().is_some());
        assert!(repo.get_by_name("Nike").await.unwrap().is_none());

        let err = repo.rename("Nike", "Adidas").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.brands();

        repo.insert(&Brand { id: 1, name: "Nike".to_string() })
            .await
            .unwrap();

        repo.delete(1).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());

        assert!(matches!(
            repo.delete(1).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
