//! # SchoolX Core
//!
//! Core library for the SchoolX school search engine.
//!
//! This crate provides the text normalization and scoring pipeline:
//!
//! - [`Lexicon`] - static stemming, stop-word and state-name tables
//! - [`Normalizer`] - raw text to canonical [`TokenSet`]
//! - [`SchoolRecord`] / [`IndexedRecord`] - typed records and their indexed form
//! - [`Corpus`] - the immutable collection of indexed records
//! - [`containment`] - asymmetric containment scoring
//! - [`SearchEngine`] - linear-scan ranked search
//!
//! ## Example
//!
//! ```rust
//! use schoolx_core::{Corpus, Normalizer, SchoolRecord, SearchEngine};
//! use std::sync::Arc;
//!
//! let records = vec![
//!     SchoolRecord::new("MONROE ELEMENTARY SCHOOL", "MONROE", "IA"),
//!     SchoolRecord::new("FOLEY HIGH SCHOOL", "FOLEY", "AL"),
//! ];
//!
//! let normalizer = Normalizer::builtin();
//! let corpus = Arc::new(Corpus::from_records(records.iter(), &normalizer));
//! let engine = SearchEngine::new(corpus);
//!
//! let results = engine.search_top_k("monroe elementary ia", 3);
//! assert_eq!(results[0], "MONROE ELEMENTARY SCHOOL, MONROE, IA");
//! ```

pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod record;
pub mod score;
pub mod search;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use normalize::{Normalizer, TokenSet};
pub use record::{Columns, FieldMap, IndexedRecord, SchoolRecord};
pub use score::containment;
pub use search::SearchEngine;
