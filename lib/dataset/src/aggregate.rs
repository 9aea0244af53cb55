//! Aggregate statistics over loaded records
//!
//! Group-by occurrence counts and the summary report: total records,
//! per-state and per-locale breakdowns, the cities with the most schools,
//! and the number of distinct cities.

use ahash::AHashMap;
use schoolx_core::{Columns, Error, FieldMap, Result};
use serde::Serialize;
use std::fmt;

/// Metro-centric locale code column in the NCES dataset.
pub const DEFAULT_LOCALE_COLUMN: &str = "MLOCALE";

/// Count occurrences of each distinct value of `key` across `rows`.
///
/// Fails with [`Error::MissingField`] if any row lacks the column.
pub fn counts_by_key(rows: &[FieldMap], key: &str) -> Result<AHashMap<String, u64>> {
    let mut counts = AHashMap::new();
    for row in rows {
        let value = row
            .get(key)
            .ok_or_else(|| Error::MissingField(key.to_string()))?;
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// All values tied at the maximum count, sorted by value for determinism.
pub fn modes(counts: &AHashMap<String, u64>) -> Vec<(String, u64)> {
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    let mut tied: Vec<(String, u64)> = counts
        .iter()
        .filter(|&(_, &count)| count == max)
        .map(|(value, &count)| (value.clone(), count))
        .collect();
    tied.sort();
    tied
}

/// The aggregate report over one dataset load.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    /// State code to school count, sorted by count descending then state.
    pub by_state: Vec<(String, u64)>,
    /// Locale code to school count, sorted by count descending then code.
    pub by_locale: Vec<(String, u64)>,
    /// Cities tied at the maximum school count.
    pub top_cities: Vec<(String, u64)>,
    pub unique_cities: usize,
}

impl DatasetSummary {
    /// Summarize `rows` using the given column names.
    pub fn from_rows(rows: &[FieldMap], columns: &Columns, locale_column: &str) -> Result<Self> {
        let by_state = counts_by_key(rows, &columns.state)?;
        let by_locale = counts_by_key(rows, locale_column)?;
        let by_city = counts_by_key(rows, &columns.city)?;

        Ok(Self {
            total: rows.len(),
            by_state: sorted_descending(by_state),
            by_locale: sorted_descending(by_locale),
            top_cities: modes(&by_city),
            unique_cities: by_city.len(),
        })
    }
}

fn sorted_descending(counts: AHashMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total schools: {}", self.total)?;
        writeln!(f, "Schools by state:")?;
        for (state, count) in &self.by_state {
            writeln!(f, "- {}: {}", state, count)?;
        }
        writeln!(f, "Schools by metro-centric locale:")?;
        for (locale, count) in &self.by_locale {
            writeln!(f, "- {}: {}", locale, count)?;
        }
        writeln!(f, "Cities with the most schools:")?;
        for (city, count) in &self.top_cities {
            writeln!(f, "- {}: {}", city, count)?;
        }
        write!(f, "Unique cities with at least 1 school: {}", self.unique_cities)
    }
}
