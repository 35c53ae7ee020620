//! Shared building blocks for the brand kit: identifier and timestamp
//! types, the pagination envelope, resource kinds, the record models,
//! validation rules and the domain error type.
//!
//! This crate has no internal dependencies so the server, the repositories
//! and the client can all depend on it.

pub mod error;
pub mod models;
pub mod pagination;
pub mod resource;
pub mod types;
pub mod validation;
