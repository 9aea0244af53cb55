//! # SchoolX Dataset
//!
//! Dataset layer for the SchoolX school search engine.
//!
//! The search core never touches I/O; this crate is the external
//! collaborator that feeds it:
//!
//! - [`load_records`] - CSV file to a sequence of raw field-maps
//! - [`counts_by_key`] / [`modes`] - group-by occurrence counts
//! - [`DatasetSummary`] - the aggregate report over one dataset load

pub mod aggregate;
pub mod loader;

pub use aggregate::{counts_by_key, modes, DatasetSummary, DEFAULT_LOCALE_COLUMN};
pub use loader::load_records;
