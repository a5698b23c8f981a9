//! Subject and classification domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::subject::{Classification, Subject, SubjectType},
};

impl Repository {
    /// Find a subject by its natural key, creating it if absent.
    /// Subjects are deduplicated by (type, identifier), never by reference.
    pub async fn subjects_lookup_or_create(
        &self,
        type_: SubjectType,
        identifier: &str,
    ) -> AppResult<Subject> {
        let existing = sqlx::query_as::<_, Subject>(
            "SELECT * FROM subjects WHERE type = $1 AND identifier = $2",
        )
        .bind(type_.as_str())
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(subject) = existing {
            return Ok(subject);
        }

        let created = sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (type, identifier) VALUES ($1, $2) RETURNING *",
        )
        .bind(type_.as_str())
        .bind(identifier)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Attach a subject to an identifier
    pub async fn classifications_create(
        &self,
        identifier_id: i32,
        subject_id: i32,
        data_source_id: i32,
        weight: i32,
    ) -> AppResult<Classification> {
        let classification = sqlx::query_as::<_, Classification>(
            r#"
            INSERT INTO classifications (identifier_id, subject_id, data_source_id, weight)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(identifier_id)
        .bind(subject_id)
        .bind(data_source_id)
        .bind(weight)
        .fetch_one(&self.pool)
        .await?;
        Ok(classification)
    }

    /// Remove all classifications a data source attached to an identifier
    pub async fn classifications_delete_for_identifier(
        &self,
        identifier_id: i32,
        data_source_id: i32,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM classifications WHERE identifier_id = $1 AND data_source_id = $2",
        )
        .bind(identifier_id)
        .bind(data_source_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count classifications attached to an identifier
    pub async fn classifications_count(&self, identifier_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*)::bigint FROM classifications WHERE identifier_id = $1",
        )
        .bind(identifier_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
