//! The indexed corpus
//!
//! An ordered, immutable collection of [`IndexedRecord`]s built once per
//! dataset load. Nothing is added, removed, or mutated after construction,
//! which makes concurrent reads safe without locking.

use crate::normalize::Normalizer;
use crate::record::{Columns, FieldMap, IndexedRecord, SchoolRecord};
use tracing::warn;

/// All indexed records for one dataset load, in source order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<IndexedRecord>,
    skipped: usize,
}

impl Corpus {
    /// Build a corpus from raw field-map rows.
    ///
    /// Rows missing a required column are skipped with a warning rather
    /// than aborting the whole load, so one malformed row cannot take down
    /// ingestion. The number of skipped rows is kept for reporting.
    pub fn build(rows: &[FieldMap], columns: &Columns, normalizer: &Normalizer) -> Self {
        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0;

        for (row_idx, row) in rows.iter().enumerate() {
            match SchoolRecord::from_fields(row, columns) {
                Ok(record) => records.push(IndexedRecord::from_record(&record, normalizer)),
                Err(e) => {
                    warn!(row = row_idx, error = %e, "skipping malformed row");
                    skipped += 1;
                }
            }
        }

        Self { records, skipped }
    }

    /// Build a corpus from already-typed records, preserving their order.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a SchoolRecord>,
        normalizer: &Normalizer,
    ) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| IndexedRecord::from_record(r, normalizer))
                .collect(),
            skipped: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped during [`Corpus::build`] for missing columns.
    #[inline]
    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&IndexedRecord> {
        self.records.get(index)
    }
}
