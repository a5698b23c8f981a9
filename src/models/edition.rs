//! Edition model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Canonical bibliographic record for a title.
///
/// Owned by exactly one identifier. `work_id` is set only for editions that
/// belong to the cataloged collection; editions created by list imports carry
/// no work until the cataloging side picks them up.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Edition {
    pub id: i32,
    pub data_source_id: i32,
    pub primary_identifier_id: i32,
    pub work_id: Option<i32>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub sort_author: Option<String>,
    /// ISO 639-2 code, e.g. "eng"
    pub language: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub first_appearance: Option<DateTime<Utc>>,
    pub most_recent_appearance: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a brand-new edition created from an import row
#[derive(Debug, Clone)]
pub struct NewEdition {
    pub data_source_id: i32,
    pub primary_identifier_id: i32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub sort_author: Option<String>,
    pub language: Option<String>,
    pub published: Option<DateTime<Utc>>,
}
