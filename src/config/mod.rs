//! Configuration module for the gene lab
//!
//! Provides types and parsing for the optional `genelab.toml` file.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
