//! Custom lists service

use chrono::Utc;
use std::sync::Arc;

use crate::{
    config::ImportConfig,
    error::{AppError, AppResult},
    models::{
        custom_list::CustomList,
        import_report::ImportReport,
    },
    repository::Repository,
    services::{
        import::CustomListImporter,
        metadata::SortNameLookup,
        normalize::Row,
    },
};

#[derive(Clone)]
pub struct ListsService {
    repository: Repository,
    lookup: Arc<dyn SortNameLookup>,
    import_config: ImportConfig,
}

impl ListsService {
    pub fn new(
        repository: Repository,
        lookup: Arc<dyn SortNameLookup>,
        import_config: ImportConfig,
    ) -> Self {
        Self {
            repository,
            lookup,
            import_config,
        }
    }

    /// List all custom lists
    pub async fn list(&self) -> AppResult<Vec<CustomList>> {
        self.repository.lists_list().await
    }

    /// Get a custom list by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<CustomList> {
        self.repository.lists_get_by_id(id).await
    }

    /// Create a custom list owned by the configured import data source
    pub async fn create(&self, name: &str) -> AppResult<CustomList> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("List name cannot be empty".to_string()));
        }
        let data_source = self
            .repository
            .data_sources_lookup(&self.import_config.data_source_name)
            .await?;
        self.repository.lists_create(data_source.id, name).await
    }

    /// Run one import of raw rows into a list.
    ///
    /// Each call is a fresh run: a new importer, a new sort-name cache, one
    /// shared import timestamp for every row.
    pub async fn import_rows(&self, list_id: i32, rows: &[Row]) -> AppResult<ImportReport> {
        let list = self.repository.lists_get_by_id(list_id).await?;
        let data_source = self
            .repository
            .data_sources_lookup(&self.import_config.data_source_name)
            .await?;

        let mut importer = CustomListImporter::new(
            self.repository.clone(),
            self.lookup.clone(),
            &self.import_config,
            data_source,
        )?;

        importer.import_rows(&list, Utc::now(), rows).await
    }
}
