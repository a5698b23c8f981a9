//! Custom list models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Named curated collection owned by a data source
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomList {
    pub id: i32,
    pub data_source_id: i32,
    pub name: String,
    pub created: DateTime<Utc>,
}

/// Membership record linking a list to one edition.
///
/// Unique per (list, edition): re-importing the same logical book updates the
/// existing entry instead of creating a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomListEntry {
    pub id: i32,
    pub list_id: i32,
    pub edition_id: i32,
    pub first_appearance: Option<DateTime<Utc>>,
    pub most_recent_appearance: Option<DateTime<Utc>>,
}

/// Create list request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomList {
    /// Name of the new list
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
