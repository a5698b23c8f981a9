//! Annotation (resource + hyperlink) domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::resource::{Hyperlink, REL_DESCRIPTION},
};

impl Repository {
    /// Store annotation content as a resource and link it to an identifier
    pub async fn annotations_create(
        &self,
        identifier_id: i32,
        data_source_id: i32,
        content: &str,
    ) -> AppResult<Hyperlink> {
        let resource_id: i32 = sqlx::query_scalar(
            "INSERT INTO resources (content) VALUES ($1) RETURNING id",
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        let link = sqlx::query_as::<_, Hyperlink>(
            r#"
            INSERT INTO hyperlinks (identifier_id, data_source_id, rel, resource_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(identifier_id)
        .bind(data_source_id)
        .bind(REL_DESCRIPTION)
        .bind(resource_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(link)
    }

    /// Remove all description links a data source attached to an identifier.
    /// The underlying resources are not removed.
    pub async fn annotations_delete_for_identifier(
        &self,
        identifier_id: i32,
        data_source_id: i32,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM hyperlinks WHERE identifier_id = $1 AND data_source_id = $2 AND rel = $3",
        )
        .bind(identifier_id)
        .bind(data_source_id)
        .bind(REL_DESCRIPTION)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count description links attached to an identifier
    pub async fn annotations_count(&self, identifier_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*)::bigint FROM hyperlinks WHERE identifier_id = $1 AND rel = $2",
        )
        .bind(identifier_id)
        .bind(REL_DESCRIPTION)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
