//! Data source domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::data_source::DataSource,
};

impl Repository {
    /// Look up a data source by name
    pub async fn data_sources_lookup(&self, name: &str) -> AppResult<DataSource> {
        sqlx::query_as::<_, DataSource>("SELECT * FROM data_sources WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Data source '{}' not found", name)))
    }
}
