//! Curata Booklist Import Server
//!
//! Ingests librarian-curated spreadsheet rows, reconciles them against the
//! bibliographic catalog and attaches the results to named curated lists.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
