//! Repository layer for database operations

pub mod annotations;
pub mod data_sources;
pub mod editions;
pub mod identifiers;
pub mod lists;
pub mod subjects;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool.
///
/// Domain methods are added in the per-aggregate modules via `impl Repository`
/// blocks, prefixed with the aggregate name.
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
