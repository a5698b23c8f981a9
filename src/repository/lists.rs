//! Custom list domain methods on Repository

use chrono::{DateTime, Utc};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::custom_list::{CustomList, CustomListEntry},
};

impl Repository {
    /// List all custom lists
    pub async fn lists_list(&self) -> AppResult<Vec<CustomList>> {
        let rows = sqlx::query_as::<_, CustomList>("SELECT * FROM custom_lists ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a custom list by ID
    pub async fn lists_get_by_id(&self, id: i32) -> AppResult<CustomList> {
        sqlx::query_as::<_, CustomList>("SELECT * FROM custom_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Custom list {} not found", id)))
    }

    /// Create a custom list owned by a data source
    pub async fn lists_create(&self, data_source_id: i32, name: &str) -> AppResult<CustomList> {
        let list = sqlx::query_as::<_, CustomList>(
            r#"
            INSERT INTO custom_lists (data_source_id, name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(data_source_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("A list named '{}' already exists", name))
            }
            other => AppError::Database(other),
        })?;
        Ok(list)
    }

    /// Find the entry for an edition in a list, if any
    pub async fn lists_find_entry(
        &self,
        list_id: i32,
        edition_id: i32,
    ) -> AppResult<Option<CustomListEntry>> {
        let entry = sqlx::query_as::<_, CustomListEntry>(
            "SELECT * FROM custom_list_entries WHERE list_id = $1 AND edition_id = $2",
        )
        .bind(list_id)
        .bind(edition_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entry)
    }

    /// Create an entry linking an edition into a list
    pub async fn lists_create_entry(
        &self,
        list_id: i32,
        edition_id: i32,
        seen_at: DateTime<Utc>,
        first_appearance: Option<DateTime<Utc>>,
    ) -> AppResult<CustomListEntry> {
        let entry = sqlx::query_as::<_, CustomListEntry>(
            r#"
            INSERT INTO custom_list_entries (
                list_id, edition_id, first_appearance, most_recent_appearance
            ) VALUES ($1, $2, COALESCE($3, $4), $4)
            RETURNING *
            "#,
        )
        .bind(list_id)
        .bind(edition_id)
        .bind(first_appearance)
        .bind(seen_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    /// Update appearance timestamps on an existing entry; the first
    /// appearance is preserved once set.
    pub async fn lists_touch_entry(
        &self,
        id: i32,
        seen_at: DateTime<Utc>,
        first_appearance: Option<DateTime<Utc>>,
    ) -> AppResult<CustomListEntry> {
        sqlx::query_as::<_, CustomListEntry>(
            r#"
            UPDATE custom_list_entries
            SET most_recent_appearance = $1,
                first_appearance = COALESCE(first_appearance, $2, $1)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(seen_at)
        .bind(first_appearance)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("List entry {} not found", id)))
    }

    /// Count entries in a list
    pub async fn lists_count_entries(&self, list_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*)::bigint FROM custom_list_entries WHERE list_id = $1",
        )
        .bind(list_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
