//! snipstash - Terminal code snippet manager
//!
//! A command-line application that stores code snippets as plain TOML
//! documents, derives tags from their content automatically, and supports
//! filtered, sorted, paginated retrieval.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SnipStashError;
