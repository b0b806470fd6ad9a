//! # Product Type Repository
//!
//! Database operations for the Type reference table. Same shape as the
//! brand repository; the table keeps its legacy singular name `Type`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockline_core::ProductType;

/// Repository for product type database operations.
#[derive(Debug, Clone)]
pub struct TypeRepository {
    pool: SqlitePool,
}

impl TypeRepository {
    /// Creates a new TypeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TypeRepository { pool }
    }

    /// Allocates the next type id: 1 on an empty table, max + 1 after.
    pub async fn next_id(&self) -> DbResult<i64> {
        let id: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(Tid), 0) + 1 FROM Type")
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Lists every product type, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<ProductType>> {
        let types =
            sqlx::query_as::<_, ProductType>("SELECT Tid AS id, Type AS name FROM Type ORDER BY Tid")
                .fetch_all(&self.pool)
                .await?;

        Ok(types)
    }

    /// Lists just the type names (for uniqueness validation).
    pub async fn names(&self) -> DbResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT Type FROM Type ORDER BY Tid")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    /// Gets a type by its exact stored name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<ProductType>> {
        let ty =
            sqlx::query_as::<_, ProductType>("SELECT Tid AS id, Type AS name FROM Type WHERE Type = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(ty)
    }

    /// Inserts a new product type.
    pub async fn insert(&self, product_type: &ProductType) -> DbResult<ProductType> {
        debug!(id = product_type.id, name = %product_type.name, "Inserting type");

        sqlx::query("INSERT INTO Type (Tid, Type) VALUES (?1, ?2)")
            .bind(product_type.id)
            .bind(&product_type.name)
            .execute(&self.pool)
            .await?;

        Ok(product_type.clone())
    }

    /// Renames a type, matching on the old name.
    pub async fn rename(&self, old_name: &str, new_name: &str) -> DbResult<()> {
        debug!(old = %old_name, new = %new_name, "Renaming type");

        let result = sqlx::query("UPDATE Type SET Type = ?2 WHERE Type = ?1")
            .bind(old_name)
            .bind(new_name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Type", old_name));
        }

        Ok(())
    }

    /// Deletes a type by id.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM Type WHERE Tid = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Type", id));
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
    async fn test_next_id_and_insert() {
        let db = test_db().await;
        let repo = db.types();

        assert_eq!(repo.next_id().await.unwrap(), 1);

        repo.insert(&ProductType { id: 1, name: "Sneakers".to_string() })
            .await
            .unwrap();

        assert_eq!(repo.next_id().await.unwrap(), 2);
        assert_eq!(repo.names().await.unwrap(), vec!["Sneakers".to_string()]);
    }

    #[tokio::test]
    async fn test_case_insensitive_unique_index() {
        let db = test_db().await;
        let repo = db.types();

        repo.insert(&ProductType { id: 1, name: "Sneakers".to_string() })
            .await
            .unwrap();

        let err = repo
            .insert(&ProductType { id: 2, name: "sneakers".to_string() })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_rename() {
        let db = test_db().await;
        let repo = db.types();

        repo.insert(&ProductType { id: 1, name: "Shoes".to_string() })
            .await
            .unwrap();

        repo.rename("Shoes", "Footwear").await.unwrap();
        assert!(repo.get_by_name("Footwear").await.unwrap().is_some());
    }
}
