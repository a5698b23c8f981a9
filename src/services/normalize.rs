//! Field normalization for import rows
//!
//! Turns a raw CSV row (field name to raw text) into trimmed scalars, parsed
//! timestamps and token lists. Unparsable values become row warnings, never
//! errors; only a broken field-name mapping is fatal.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;

use crate::{
    config::FieldMapping,
    error::{AppError, AppResult},
};

/// A raw import row as handed over by the CSV reader
pub type Row = HashMap<String, String>;

/// Split a comma-separated list field into trimmed non-empty tokens
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(v) => v
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
    }
}

/// A row after normalization, plus the warnings produced along the way
#[derive(Debug, Clone, Default)]
pub struct NormalizedRow {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub language: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub first_appearance: Option<DateTime<Utc>>,
    pub annotation: Option<String>,
    pub annotation_author_name: Option<String>,
    pub annotation_author_affiliation: Option<String>,
    pub audiences: Vec<String>,
    pub tags: Vec<String>,
    pub warnings: Vec<String>,
}

/// Normalizer bound to one field mapping and date format
#[derive(Debug, Clone)]
pub struct RowNormalizer {
    fields: FieldMapping,
    date_format: String,
}

impl RowNormalizer {
    /// Build a normalizer, rejecting a malformed field mapping up front.
    /// A bad mapping is a configuration error and aborts the whole run.
    pub fn new(fields: FieldMapping, date_format: &str) -> AppResult<Self> {
        let mut seen: Vec<&str> = Vec::new();
        let scalar_names = [
            &fields.title,
            &fields.author,
            &fields.isbn,
            &fields.language,
            &fields.publication_date,
            &fields.first_appearance,
            &fields.annotation,
            &fields.annotation_author_name,
            &fields.annotation_author_affiliation,
        ];
        for name in scalar_names
            .into_iter()
            .chain(fields.audience_fields.iter())
            .chain(fields.tag_fields.iter())
        {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::Configuration(
                    "Field mapping contains an empty column name".to_string(),
                ));
            }
            if seen.contains(&name) {
                return Err(AppError::Configuration(format!(
                    "Field mapping assigns column '{}' to more than one role",
                    name
                )));
            }
            seen.push(name);
        }
        if date_format.trim().is_empty() {
            return Err(AppError::Configuration(
                "Date format must not be empty".to_string(),
            ));
        }
        Ok(Self {
            fields,
            date_format: date_format.to_string(),
        })
    }

    pub fn fields(&self) -> &FieldMapping {
        &self.fields
    }

    /// Fetch a scalar field, trimmed; absent or blank becomes None
    fn scalar(&self, row: &Row, field: &str) -> Option<String> {
        row.get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(String::from)
    }

    /// Parse a date field; a value that does not match the configured
    /// format produces a warning and no value.
    fn date(&self, row: &Row, field: &str, warnings: &mut Vec<String>) -> Option<DateTime<Utc>> {
        let raw = self.scalar(row, field)?;
        match NaiveDateTime::parse_from_str(&raw, &self.date_format) {
            Ok(naive) => Some(naive.and_utc()),
            Err(_) => {
                warnings.push(format!(
                    "Could not parse '{}' in column '{}' as a date (expected format {})",
                    raw, field, self.date_format
                ));
                None
            }
        }
    }

    /// Collect tokens from every configured list column of one kind
    fn tokens(&self, row: &Row, columns: &[String]) -> Vec<String> {
        let mut out = Vec::new();
        for column in columns {
            out.extend(split_list(row.get(column).map(String::as_str)));
        }
        out
    }

    /// Normalize one raw row
    pub fn normalize(&self, row: &Row) -> NormalizedRow {
        let mut warnings = Vec::new();
        let published = self.date(row, &self.fields.publication_date, &mut warnings);
        let first_appearance = self.date(row, &self.fields.first_appearance, &mut warnings);

        NormalizedRow {
            title: self.scalar(row, &self.fields.title),
            author: self.scalar(row, &self.fields.author),
            isbn: self.scalar(row, &self.fields.isbn),
            language: self.scalar(row, &self.fields.language),
            published,
            first_appearance,
            annotation: self.scalar(row, &self.fields.annotation),
            annotation_author_name: self.scalar(row, &self.fields.annotation_author_name),
            annotation_author_affiliation: self
                .scalar(row, &self.fields.annotation_author_affiliation),
            audiences: self.tokens(row, &self.fields.audience_fields),
            tags: self.tokens(row, &self.fields.tag_fields),
            warnings,
        }
    }

    /// Attribution suffix for an annotation.
    ///
    /// No annotator name means no citation at all; an affiliation alone is
    /// not attributable to anyone and is ignored.
    pub fn annotation_citation(&self, row: &Row) -> Option<String> {
        let name = self.scalar(row, &self.fields.annotation_author_name)?;
        match self.scalar(row, &self.fields.annotation_author_affiliation) {
            Some(affiliation) => Some(format!(" \u{2014}{}, {}", name, affiliation)),
            None => Some(format!(" \u{2014}{}", name)),
        }
    }
}
