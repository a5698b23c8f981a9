//! API handlers for Curata REST endpoints

pub mod health;
pub mod lists;
pub mod openapi;
