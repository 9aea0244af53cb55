//! Static word tables used by normalization
//!
//! Three read-only tables drive canonicalization:
//!
//! - **Stemmings**: common dataset abbreviations mapped to their expanded
//!   form, so "ELEM" and "ELEMENTARY" index to the same token.
//! - **Stop words**: filler words dropped entirely.
//! - **State names**: full US state names mapped to their two-letter postal
//!   abbreviation. Matching happens per individual word token, so multi-word
//!   names ("NEW YORK") only ever match through their abbreviation.
//!
//! The tables are applied symmetrically at index time and query time so that
//! "monroe elem sch" matches "MONROE ELEMENTARY SCHOOL".

use ahash::{AHashMap, AHashSet};
use std::sync::LazyLock;

/// Dataset abbreviations mapped to their canonical expanded form.
const STEMMINGS: &[(&str, &str)] = &[
    ("ELEM", "ELEMENTARY"),
    ("SCH", "SCHOOL"),
    ("SCHOOLS", "SCHOOL"),
    ("SCHL", "SCHOOL"),
    ("SR", "SENIOR"),
    ("JR", "JUNIOR"),
    ("N", "NORTH"),
    ("S", "SOUTH"),
    ("W", "WEST"),
    ("E", "EAST"),
    ("SCI", "SCIENCE"),
    ("SCIENCES", "SCIENCE"),
    ("MT", "MOUNT"),
    ("ST", "SAINT"),
];

/// Words carrying no signal for matching.
const STOP_WORDS: &[&str] = &["THE", "AND", "OF", "AT"];

/// Full state names mapped to USPS two-letter abbreviations.
const STATE_NAMES: &[(&str, &str)] = &[
    ("ALABAMA", "AL"),
    ("ALASKA", "AK"),
    ("ARIZONA", "AZ"),
    ("ARKANSAS", "AR"),
    ("CALIFORNIA", "CA"),
    ("COLORADO", "CO"),
    ("CONNECTICUT", "CT"),
    ("DELAWARE", "DE"),
    ("FLORIDA", "FL"),
    ("GEORGIA", "GA"),
    ("HAWAII", "HI"),
    ("IDAHO", "ID"),
    ("ILLINOIS", "IL"),
    ("INDIANA", "IN"),
    ("IOWA", "IA"),
    ("KANSAS", "KS"),
    ("KENTUCKY", "KY"),
    ("LOUISIANA", "LA"),
    ("MAINE", "ME"),
    ("MARYLAND", "MD"),
    ("MASSACHUSETTS", "MA"),
    ("MICHIGAN", "MI"),
    ("MINNESOTA", "MN"),
    ("MISSISSIPPI", "MS"),
    ("MISSOURI", "MO"),
    ("MONTANA", "MT"),
    ("NEBRASKA", "NE"),
    ("NEVADA", "NV"),
    ("NEW HAMPSHIRE", "NH"),
    ("NEW JERSEY", "NJ"),
    ("NEW MEXICO", "NM"),
    ("NEW YORK", "NY"),
    ("NORTH CAROLINA", "NC"),
    ("NORTH DAKOTA", "ND"),
    ("OHIO", "OH"),
    ("OKLAHOMA", "OK"),
    ("OREGON", "OR"),
    ("PENNSYLVANIA", "PA"),
    ("RHODE ISLAND", "RI"),
    ("SOUTH CAROLINA", "SC"),
    ("SOUTH DAKOTA", "SD"),
    ("TENNESSEE", "TN"),
    ("TEXAS", "TX"),
    ("UTAH", "UT"),
    ("VERMONT", "VT"),
    ("VIRGINIA", "VA"),
    ("WASHINGTON", "WA"),
    ("WEST VIRGINIA", "WV"),
    ("WISCONSIN", "WI"),
    ("WYOMING", "WY"),
    ("DISTRICT OF COLUMBIA", "DC"),
    ("AMERICAN SAMOA", "AS"),
    ("GUAM", "GU"),
    ("PUERTO RICO", "PR"),
    ("VIRGIN ISLANDS", "VI"),
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::new(
        STEMMINGS.iter().map(|&(k, v)| (k.to_string(), v.to_string())),
        STOP_WORDS.iter().map(|&w| w.to_string()),
        STATE_NAMES.iter().map(|&(k, v)| (k.to_string(), v.to_string())),
    )
});

/// The word tables consulted during normalization.
///
/// Immutable once constructed and shared read-only by all normalization
/// calls. Use [`Lexicon::builtin`] for the standard tables; custom instances
/// exist mainly so tests can exercise precedence rules in isolation.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stemmings: AHashMap<String, String>,
    stop_words: AHashSet<String>,
    states: AHashMap<String, String>,
}

impl Lexicon {
    pub fn new(
        stemmings: impl IntoIterator<Item = (String, String)>,
        stop_words: impl IntoIterator<Item = String>,
        states: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            stemmings: stemmings.into_iter().collect(),
            stop_words: stop_words.into_iter().collect(),
            states: states.into_iter().collect(),
        }
    }

    /// The standard tables, built once per process.
    #[inline]
    #[must_use]
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Canonical expansion for a stemming key, if one exists.
    #[inline]
    pub fn stem(&self, word: &str) -> Option<&str> {
        self.stemmings.get(word).map(String::as_str)
    }

    /// Two-letter abbreviation for a full state name token, if one exists.
    #[inline]
    pub fn state_abbreviation(&self, word: &str) -> Option<&str> {
        self.states.get(word).map(String::as_str)
    }

    #[inline]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
