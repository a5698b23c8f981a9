//! Data models for Curata

pub mod custom_list;
pub mod data_source;
pub mod edition;
pub mod identifier;
pub mod import_report;
pub mod resource;
pub mod subject;

// Re-export commonly used types
pub use custom_list::{CustomList, CustomListEntry};
pub use data_source::DataSource;
pub use edition::Edition;
pub use identifier::{Identifier, IdentifierType};
pub use import_report::{ImportReport, RowOutcome};
pub use resource::{Hyperlink, Resource};
pub use subject::{Classification, Subject, SubjectType};
