//! Core types and trait definitions for the Folio contact pipeline.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The API, store and client crates all depend on it.

pub mod compose;
pub mod error;
pub mod store;
pub mod submission;

pub use error::{Error, Result, ValidationError};
