//! Edition domain methods on Repository

use chrono::{DateTime, Utc};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::edition::{Edition, NewEdition},
};

impl Repository {
    /// Get an edition by ID
    pub async fn editions_get_by_id(&self, id: i32) -> AppResult<Edition> {
        sqlx::query_as::<_, Edition>("SELECT * FROM editions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Edition {} not found", id)))
    }

    /// Get the edition owned by an identifier, if any
    pub async fn editions_get_by_identifier(
        &self,
        identifier_id: i32,
    ) -> AppResult<Option<Edition>> {
        let edition = sqlx::query_as::<_, Edition>(
            "SELECT * FROM editions WHERE primary_identifier_id = $1",
        )
        .bind(identifier_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(edition)
    }

    /// Exact-match search for a cataloged work.
    ///
    /// Only editions belonging to a work count as part of the collection;
    /// editions created by earlier imports have no work and are reconciled
    /// through their identifier instead. When several editions match,
    /// the earliest-created one wins.
    pub async fn editions_find_cataloged_work(
        &self,
        title: &str,
        sort_author: &str,
    ) -> AppResult<Option<Edition>> {
        let edition = sqlx::query_as::<_, Edition>(
            r#"
            SELECT * FROM editions
            WHERE title = $1 AND sort_author = $2 AND work_id IS NOT NULL
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(title)
        .bind(sort_author)
        .fetch_optional(&self.pool)
        .await?;
        Ok(edition)
    }

    /// Create a new edition for an identifier
    pub async fn editions_create(&self, data: &NewEdition) -> AppResult<Edition> {
        let edition = sqlx::query_as::<_, Edition>(
            r#"
            INSERT INTO editions (
                data_source_id, primary_identifier_id, title, author,
                sort_author, language, published
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.data_source_id)
        .bind(data.primary_identifier_id)
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.sort_author)
        .bind(&data.language)
        .bind(data.published)
        .fetch_one(&self.pool)
        .await?;
        Ok(edition)
    }

    /// Update appearance timestamps on an edition.
    ///
    /// `most_recent_appearance` always moves to `seen_at`; `first_appearance`
    /// is filled only if still null, so it never moves backward.
    pub async fn editions_touch_appearances(
        &self,
        id: i32,
        seen_at: DateTime<Utc>,
        first_appearance: Option<DateTime<Utc>>,
    ) -> AppResult<Edition> {
        sqlx::query_as::<_, Edition>(
            r#"
            UPDATE editions
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
        .ok_or_else(|| AppError::NotFound(format!("Edition {} not found", id)))
    }
}
