//! encyclo - Personal wiki engine
//!
//! Stores named markdown entries as one file per title, resolves them by
//! exact title or substring search, and picks entries at random.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use error::EncycloError;
