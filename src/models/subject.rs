//! Subject and classification models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Subject vocabularies used by list imports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectType {
    Tag,
    FreeformAudience,
}

impl SubjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::Tag => "tag",
            SubjectType::FreeformAudience => "freeform-audience",
        }
    }
}

impl std::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deduplicated typed label; unique per (type, identifier)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub type_: String,
    pub identifier: String,
}

/// Link between an identifier and a subject, weighted and attributed
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Classification {
    pub id: i32,
    pub identifier_id: i32,
    pub subject_id: i32,
    pub data_source_id: i32,
    pub weight: i32,
}
