//! Integration tests
//!
//! DB-backed tests run against `DATABASE_URL` and are ignored by default:
//! cargo test -- --ignored

mod api_tests;
mod import_tests;
mod support;
