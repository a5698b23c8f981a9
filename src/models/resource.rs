//! Annotation resource and hyperlink models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Link relation for librarian annotations
pub const REL_DESCRIPTION: &str = "description";

/// Textual resource (annotation content)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Resource {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Attachment of a resource to an identifier
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hyperlink {
    pub id: i32,
    pub identifier_id: i32,
    pub data_source_id: i32,
    pub rel: String,
    pub resource_id: i32,
}
