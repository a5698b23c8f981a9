//! Import report models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::custom_list::CustomListEntry;

/// Per-row result of a list import.
///
/// Row-level data problems surface here as warnings; they never abort the
/// batch. `entry` is absent only when the row could not be attached at all
/// (no ISBN and no matching work).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RowOutcome {
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<CustomListEntry>,
}

/// Report returned for a whole import run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    pub list_id: i32,
    pub rows_processed: usize,
    pub rows_attached: usize,
    pub rows: Vec<RowOutcome>,
}
