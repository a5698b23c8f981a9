//! Business logic services

pub mod import;
pub mod languages;
pub mod lists;
pub mod metadata;
pub mod normalize;

use std::sync::Arc;

use crate::{
    config::{ImportConfig, MetadataConfig},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub lists: lists::ListsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        metadata_config: &MetadataConfig,
        import_config: ImportConfig,
    ) -> AppResult<Self> {
        let lookup: Arc<dyn metadata::SortNameLookup> =
            Arc::new(metadata::MetadataClient::new(metadata_config)?);
        Ok(Self {
            lists: lists::ListsService::new(repository, lookup, import_config),
        })
    }
}
