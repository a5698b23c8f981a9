//! Identifier domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::identifier::{Identifier, IdentifierType},
};

impl Repository {
    /// Find an identifier by its natural key, creating it if absent.
    ///
    /// The (type, value) pair is globally unique; repeated imports of the
    /// same ISBN always resolve to the same row.
    pub async fn identifiers_lookup_or_create(
        &self,
        type_: IdentifierType,
        value: &str,
    ) -> AppResult<Identifier> {
        let existing = sqlx::query_as::<_, Identifier>(
            "SELECT * FROM identifiers WHERE type = $1 AND identifier = $2",
        )
        .bind(type_.as_str())
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(identifier) = existing {
            return Ok(identifier);
        }

        let created = sqlx::query_as::<_, Identifier>(
            "INSERT INTO identifiers (type, identifier) VALUES ($1, $2) RETURNING *",
        )
        .bind(type_.as_str())
        .bind(value)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
