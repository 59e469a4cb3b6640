//! Key/value repository over the `entries` table.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// String-keyed entry storage.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the raw value stored under `key`.
    pub async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM entries WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Store `value` under `key`, replacing any previous value.
    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO entries (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Apply several writes atomically. `None` removes the key.
    pub async fn write_batch(&self, writes: &[(&str, Option<String>)]) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        for (key, value) in writes {
            match value {
                Some(value) => {
                    sqlx::query(
                        "INSERT INTO entries (key, value, updated_at) VALUES (?, ?, ?)
                         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                    )
                    .bind(*key)
                    .bind(value)
                    .bind(&now)
                    .execute(&mut *tx)
                    .await?;
                }
                None => {
                    sqlx::query("DELETE FROM entries WHERE key = ?")
                        .bind(*key)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Remove the entry under `key`. Removing a missing key is not an error.
    pub async fn remove_item(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("kv.sqlite"))
            .await
            .unwrap();
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let (repo, _dir) = repo().await;
        assert_eq!(repo.get_item("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_remove_deletes() {
        let (repo, _dir) = repo().await;

        repo.set_item("k", "1").await.unwrap();
        repo.set_item("k", "2").await.unwrap();
        assert_eq!(repo.get_item("k").await.unwrap().as_deref(), Some("2"));

        repo.remove_item("k").await.unwrap();
        assert_eq!(repo.get_item("k").await.unwrap(), None);

        // removing again is fine
        repo.remove_item("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_write_batch_sets_and_removes() {
        let (repo, _dir) = repo().await;
        repo.set_item("gone", "x").await.unwrap();

        repo.write_batch(&[("a", Some("1".to_string())), ("gone", None)])
            .await
            .unwrap();

        assert_eq!(repo.get_item("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(repo.get_item("gone").await.unwrap(), None);
    }
}
