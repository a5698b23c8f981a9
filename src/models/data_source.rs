//! Data source model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Origin of catalog data (who asserted a fact about a title)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DataSource {
    pub id: i32,
    pub name: String,
}

impl DataSource {
    /// Data source for librarian-curated list imports
    pub const LIBRARIANS: &'static str = "Librarians";
}
