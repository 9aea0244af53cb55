//! Containment scoring
//!
//! The similarity between a query and a record is the fraction of the
//! record's tokens that also appear in the query. The measure is
//! intentionally asymmetric: a query that covers everything a record says
//! scores 1.0 against it, while a query that merely shares a word with a
//! long record scores low.

use crate::normalize::TokenSet;

/// Score `reference` against `query`: `|query ∩ reference| / |reference|`.
///
/// Returns a value in `[0.0, 1.0]`. An empty reference set scores 0.0
/// rather than faulting; records whose fields were all punctuation or stop
/// words simply never match.
#[inline]
#[must_use]
pub fn containment(query: &TokenSet, reference: &TokenSet) -> f32 {
    if reference.is_empty() {
        return 0.0;
    }
    let shared = query.iter().filter(|token| reference.contains(*token)).count();
    shared as f32 / reference.len() as f32
}
