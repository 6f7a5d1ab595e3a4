//! # varanbook-core
//!
//! Core crate for Varanbook, the multi-tenant matrimonial centre backend.
//! Contains configuration schemas, collaborator traits, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Varanbook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
