//! Curated-list import pipeline
//!
//! Reconciles one spreadsheet row at a time against the catalog: normalize
//! the fields, canonicalize the author, look for a matching cataloged work,
//! create or update the identifier/edition/annotation/classifications, then
//! attach the result to the target list.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    config::ImportConfig,
    error::AppResult,
    models::{
        custom_list::{CustomList, CustomListEntry},
        data_source::DataSource,
        edition::{Edition, NewEdition},
        identifier::IdentifierType,
        import_report::{ImportReport, RowOutcome},
        subject::SubjectType,
    },
    repository::Repository,
    services::{
        languages,
        metadata::{SortNameLookup, SortNameResolver},
        normalize::{NormalizedRow, Row, RowNormalizer},
    },
};

/// Status when the row matched a work already in the collection
pub const STATUS_MATCHED: &str = "Found matching work in collection.";
/// Status when the row did not match any cataloged work
pub const STATUS_NO_MATCH: &str = "No matching work found.";

const CLASSIFICATION_WEIGHT: i32 = 1;

/// Resolve a row's language column to an ISO 639-2 code.
/// An absent column falls back to the default; an unrecognized name does
/// too, with a warning.
fn language_for_row(language: Option<&str>, default: &str) -> (String, Option<String>) {
    match language {
        None => (default.to_string(), None),
        Some(name) => match languages::iso639_2_for_name(name) {
            Some(code) => (code.to_string(), None),
            None => (
                default.to_string(),
                Some(format!(
                    "Unrecognized language '{}'; assuming '{}'",
                    name, default
                )),
            ),
        },
    }
}

/// One import run over a named curated list.
///
/// Holds the per-run sort-name cache, so an importer must not be reused
/// across runs.
pub struct CustomListImporter {
    repository: Repository,
    normalizer: RowNormalizer,
    resolver: SortNameResolver,
    data_source: DataSource,
    default_language: String,
    overwrite_old_data: bool,
}

impl CustomListImporter {
    /// Build an importer for one run. A malformed field mapping fails here,
    /// before any row is processed.
    pub fn new(
        repository: Repository,
        lookup: Arc<dyn SortNameLookup>,
        config: &ImportConfig,
        data_source: DataSource,
    ) -> AppResult<Self> {
        let normalizer = RowNormalizer::new(config.fields.clone(), &config.date_format)?;
        Ok(Self {
            repository,
            normalizer,
            resolver: SortNameResolver::new(lookup),
            data_source,
            default_language: config.default_language.clone(),
            overwrite_old_data: config.overwrite_old_data,
        })
    }

    /// Import every row in file order, aggregating per-row outcomes.
    /// Row-level data problems become warnings on their row; only
    /// collaborator failures propagate and halt the batch.
    pub async fn import_rows(
        &mut self,
        list: &CustomList,
        now: DateTime<Utc>,
        rows: &[Row],
    ) -> AppResult<ImportReport> {
        let mut outcomes = Vec::with_capacity(rows.len());
        for row in rows {
            outcomes.push(self.row_to_list_item(list, now, row).await?);
        }
        let rows_attached = outcomes.iter().filter(|o| o.entry.is_some()).count();
        tracing::info!(
            "Imported {} rows into list '{}' ({} attached)",
            rows.len(),
            list.name,
            rows_attached
        );
        Ok(ImportReport {
            list_id: list.id,
            rows_processed: rows.len(),
            rows_attached,
            rows: outcomes,
        })
    }

    /// Run the full pipeline for one row
    pub async fn row_to_list_item(
        &mut self,
        list: &CustomList,
        now: DateTime<Utc>,
        row: &Row,
    ) -> AppResult<RowOutcome> {
        let normalized = self.normalizer.normalize(row);
        let mut warnings = normalized.warnings.clone();

        let sort_author = self.resolver.resolve(normalized.author.as_deref()).await?;

        let matched = self.find_existing_work(&normalized, &sort_author).await?;
        let status = if matched.is_some() {
            STATUS_MATCHED
        } else {
            STATUS_NO_MATCH
        };

        let edition = match self
            .upsert_title(now, row, &normalized, &sort_author, matched, &mut warnings)
            .await?
        {
            Some(edition) => edition,
            None => {
                return Ok(RowOutcome {
                    status: status.to_string(),
                    warnings,
                    entry: None,
                })
            }
        };

        let entry = self.attach_to_list(list, &edition, now, &normalized).await?;

        Ok(RowOutcome {
            status: status.to_string(),
            warnings,
            entry: Some(entry),
        })
    }

    /// Work Matcher: exact title + sort author against cataloged works.
    /// Rows without both keys cannot match anything.
    async fn find_existing_work(
        &self,
        normalized: &NormalizedRow,
        sort_author: &str,
    ) -> AppResult<Option<Edition>> {
        let title = match normalized.title.as_deref() {
            Some(t) => t,
            None => return Ok(None),
        };
        if sort_author.is_empty() {
            return Ok(None);
        }
        self.repository
            .editions_find_cataloged_work(title, sort_author)
            .await
    }

    /// Record Upserter: create or update identifier, edition, annotation and
    /// classifications for one row. Returns None when the row has no ISBN
    /// and no matched work, in which case there is nothing to attach.
    async fn upsert_title(
        &self,
        now: DateTime<Utc>,
        row: &Row,
        normalized: &NormalizedRow,
        sort_author: &str,
        matched: Option<Edition>,
        warnings: &mut Vec<String>,
    ) -> AppResult<Option<Edition>> {
        let edition = match matched {
            // The match already holds the canonical bibliographic facts;
            // only the appearance timestamps move.
            Some(edition) => {
                self.repository
                    .editions_touch_appearances(edition.id, now, normalized.first_appearance)
                    .await?
            }
            None => {
                let isbn = match normalized.isbn.as_deref() {
                    Some(isbn) => isbn,
                    None => {
                        warnings.push(
                            "Row has no ISBN and matches no work in the collection; skipped."
                                .to_string(),
                        );
                        return Ok(None);
                    }
                };
                let identifier = self
                    .repository
                    .identifiers_lookup_or_create(IdentifierType::Isbn, isbn)
                    .await?;

                let edition = match self
                    .repository
                    .editions_get_by_identifier(identifier.id)
                    .await?
                {
                    Some(edition) => edition,
                    None => {
                        let (language, language_warning) = language_for_row(
                            normalized.language.as_deref(),
                            &self.default_language,
                        );
                        if let Some(w) = language_warning {
                            warnings.push(w);
                        }
                        self.repository
                            .editions_create(&NewEdition {
                                data_source_id: self.data_source.id,
                                primary_identifier_id: identifier.id,
                                title: normalized.title.clone(),
                                author: normalized.author.clone(),
                                sort_author: Some(sort_author.to_string()),
                                language: Some(language),
                                published: normalized.published,
                            })
                            .await?
                    }
                };
                self.repository
                    .editions_touch_appearances(edition.id, now, normalized.first_appearance)
                    .await?
            }
        };

        let identifier_id = edition.primary_identifier_id;

        if self.overwrite_old_data {
            self.repository
                .annotations_delete_for_identifier(identifier_id, self.data_source.id)
                .await?;
            self.repository
                .classifications_delete_for_identifier(identifier_id, self.data_source.id)
                .await?;
        }

        if let Some(annotation) = normalized.annotation.as_deref() {
            let citation = self.normalizer.annotation_citation(row).unwrap_or_default();
            let content = format!("{}{}", annotation, citation);
            self.repository
                .annotations_create(identifier_id, self.data_source.id, &content)
                .await?;
        }

        self.classify(identifier_id, SubjectType::Tag, &normalized.tags)
            .await?;
        self.classify(
            identifier_id,
            SubjectType::FreeformAudience,
            &normalized.audiences,
        )
        .await?;

        Ok(Some(edition))
    }

    /// One classification per token; subjects deduplicated by natural key.
    /// In additive mode every run appends its own rows.
    async fn classify(
        &self,
        identifier_id: i32,
        type_: SubjectType,
        tokens: &[String],
    ) -> AppResult<()> {
        for token in tokens {
            let subject = self.repository.subjects_lookup_or_create(type_, token).await?;
            self.repository
                .classifications_create(
                    identifier_id,
                    subject.id,
                    self.data_source.id,
                    CLASSIFICATION_WEIGHT,
                )
                .await?;
        }
        Ok(())
    }

    /// List Item Assembler: one entry per (list, edition), updated in place
    /// on re-import.
    async fn attach_to_list(
        &self,
        list: &CustomList,
        edition: &Edition,
        now: DateTime<Utc>,
        normalized: &NormalizedRow,
    ) -> AppResult<CustomListEntry> {
        match self.repository.lists_find_entry(list.id, edition.id).await? {
            Some(entry) => {
                self.repository
                    .lists_touch_entry(entry.id, now, normalized.first_appearance)
                    .await
            }
            None => {
                self.repository
                    .lists_create_entry(list.id, edition.id, now, normalized.first_appearance)
                    .await
            }
        }
    }
}
