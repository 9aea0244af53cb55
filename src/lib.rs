//! # SchoolX
//!
//! Approximate free-text search over tabular school records.
//!
//! SchoolX ingests a CSV of schools (name, city, state, locale type) and
//! supports two functions: aggregate statistics grouped by categorical
//! columns, and ranked search by lexical similarity to a query string.
//! Records and queries run through the same normalization pipeline
//! (uppercase, punctuation stripping, abbreviation stemming, state-name
//! substitution, stop-word removal), and records are ranked by the fraction
//! of their tokens covered by the query.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! schoolx search "monroe elementary school ia" --data school_data.csv
//! schoolx stats --data school_data.csv
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use schoolx::prelude::*;
//! use std::sync::Arc;
//!
//! let rows = load_records("school_data.csv")?;
//! let normalizer = Normalizer::builtin();
//! let corpus = Arc::new(Corpus::build(&rows, &Columns::default(), &normalizer));
//! let engine = SearchEngine::with_normalizer(corpus, normalizer);
//!
//! for display in engine.search_top_k("foley high alabama", 3) {
//!     println!("{}", display);
//! }
//! # Ok::<(), schoolx::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! SchoolX is composed of two crates:
//!
//! - [`schoolx-core`](https://docs.rs/schoolx-core) - normalization, scoring, search (no I/O)
//! - [`schoolx-dataset`](https://docs.rs/schoolx-dataset) - CSV ingestion and aggregates

// Re-export core types
pub use schoolx_core::{
    containment, Columns, Corpus, Error, FieldMap, IndexedRecord, Lexicon, Normalizer, Result,
    SchoolRecord, SearchEngine, TokenSet,
};

// Re-export dataset layer
pub use schoolx_dataset::{
    counts_by_key, load_records, modes, DatasetSummary, DEFAULT_LOCALE_COLUMN,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        containment, counts_by_key, load_records, modes, Columns, Corpus, DatasetSummary, Error,
        FieldMap, IndexedRecord, Lexicon, Normalizer, Result, SchoolRecord, SearchEngine, TokenSet,
        DEFAULT_LOCALE_COLUMN,
    };
}
