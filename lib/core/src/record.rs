//! Typed school records and their indexed form
//!
//! Raw CSV rows arrive as generic field-maps. [`SchoolRecord`] lifts the
//! columns that matter into named fields (keeping the rest for grouping
//! lookups), and [`IndexedRecord`] is the searchable form: a display string
//! plus the canonical token set derived from it.

use crate::error::{Error, Result};
use crate::normalize::{Normalizer, TokenSet};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A raw row: column name to cell value.
pub type FieldMap = AHashMap<String, String>;

/// Names of the columns a record is built from.
///
/// Defaults match the NCES school dataset this engine was written for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Columns {
    pub name: String,
    pub city: String,
    pub state: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            name: "SCHNAM05".to_string(),
            city: "LCITY05".to_string(),
            state: "LSTATE05".to_string(),
        }
    }
}

/// A school with its identifying fields lifted out of the raw row.
///
/// Columns not named in [`Columns`] stay available through [`Self::get`]
/// for grouping-key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchoolRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    /// Remaining columns from the source row.
    #[serde(default)]
    pub extra: FieldMap,
}

impl SchoolRecord {
    pub fn new(name: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            extra: FieldMap::new(),
        }
    }

    /// Build a record from a raw field-map.
    ///
    /// Fails with [`Error::MissingField`] naming the first absent required
    /// column.
    pub fn from_fields(fields: &FieldMap, columns: &Columns) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            fields
                .get(key)
                .cloned()
                .ok_or_else(|| Error::MissingField(key.to_string()))
        };

        let name = required(&columns.name)?;
        let city = required(&columns.city)?;
        let state = required(&columns.state)?;

        let extra = fields
            .iter()
            .filter(|(key, _)| {
                **key != columns.name && **key != columns.city && **key != columns.state
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            name,
            city,
            state,
            extra,
        })
    }

    /// Look up a column that was not lifted into a named field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

/// A record prepared for search: built once at load time, never mutated.
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    /// Human-readable "name, city, state".
    display: String,
    /// Union of the three independently normalized fields.
    tokens: TokenSet,
}

impl IndexedRecord {
    /// Index a record for search.
    ///
    /// The token set is the union of `normalize(name)`, `normalize(city)`
    /// and `normalize(state)` - each field normalized on its own, so
    /// punctuation fragments never bleed across field boundaries and the
    /// union is invariant to field order.
    #[must_use]
    pub fn from_record(record: &SchoolRecord, normalizer: &Normalizer) -> Self {
        let display = format!("{}, {}, {}", record.name, record.city, record.state);

        let mut tokens = normalizer.normalize(&record.name);
        tokens.extend(normalizer.normalize(&record.city));
        tokens.extend(normalizer.normalize(&record.state));

        Self { display, tokens }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}
