//! Identifier model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Identifier schemes known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    Isbn,
}

impl IdentifierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Isbn => "isbn",
        }
    }
}

impl std::fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique catalog key for a bibliographic entity.
///
/// The (type, identifier) pair is globally unique; creation always goes
/// through a lookup-or-create on that natural key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Identifier {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub type_: String,
    pub identifier: String,
}
