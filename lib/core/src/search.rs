//! Search orchestration
//!
//! A [`SearchEngine`] normalizes a query once, scores it against every
//! record in the corpus in a single linear pass, and returns display
//! strings ranked by descending containment score. The sort is stable, so
//! tied records keep their corpus order and repeated searches are
//! deterministic.

use crate::corpus::Corpus;
use crate::normalize::Normalizer;
use crate::score::containment;
use std::sync::Arc;

/// Ranked search over an immutable corpus.
///
/// The corpus is shared, not owned, so multiple engines (or threads) can
/// scan the same load without copying it.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Arc<Corpus>,
    normalizer: Normalizer,
}

impl SearchEngine {
    /// Create an engine over `corpus` using the built-in lexicon.
    #[must_use]
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_normalizer(corpus, Normalizer::builtin())
    }

    /// Create an engine with a custom normalizer.
    ///
    /// Queries must be normalized with the same tables the corpus was
    /// indexed with, otherwise canonical tokens will not line up.
    #[must_use]
    pub fn with_normalizer(corpus: Arc<Corpus>, normalizer: Normalizer) -> Self {
        Self { corpus, normalizer }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Score every record against `query`, ranked by descending score.
    ///
    /// One linear pass over the corpus; no pruning, no caching between
    /// calls. Ties keep corpus order.
    pub fn search_scored(&self, query: &str) -> Vec<(&str, f32)> {
        let query_tokens = self.normalizer.normalize(query);

        let mut scored: Vec<(&str, f32)> = self
            .corpus
            .iter()
            .map(|record| (record.display(), containment(&query_tokens, record.tokens())))
            .collect();

        // Stable sort keeps corpus order for equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    /// All display strings, ranked by descending score.
    pub fn search(&self, query: &str) -> Vec<&str> {
        self.search_scored(query)
            .into_iter()
            .map(|(display, _)| display)
            .collect()
    }

    /// The top `k` display strings, ranked by descending score.
    pub fn search_top_k(&self, query: &str, k: usize) -> Vec<&str> {
        let mut results = self.search(query);
        results.truncate(k);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SchoolRecord;

    fn engine(records: &[SchoolRecord]) -> SearchEngine {
        let normalizer = Normalizer::builtin();
        let corpus = Arc::new(Corpus::from_records(records.iter(), &normalizer));
        SearchEngine::with_normalizer(corpus, normalizer)
    }

    fn sample_records() -> Vec<SchoolRecord> {
        vec![
            SchoolRecord::new("MONROE ELEMENTARY SCHOOL", "MONROE", "IA"),
            SchoolRecord::new("FOLEY HIGH SCHOOL", "FOLEY", "AL"),
            SchoolRecord::new("TWIN CEDARS JR-SR HIGH SCHOOL", "BUSSEY", "IA"),
        ]
    }

    #[test]
    fn test_exact_cover_ranks_first_with_full_score() {
        let records = vec![SchoolRecord::new("Monroe Elementary School", "Monroe", "IA")];
        let engine = engine(&records);

        let results = engine.search_scored("monroe elementary school ia");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "Monroe Elementary School, Monroe, IA");
        assert_eq!(results[0].1, 1.0);
    }

    #[test]
    fn test_best_match_ranks_first() {
        let engine = engine(&sample_records());
        let results = engine.search("foley high alabama");
        assert_eq!(results[0], "FOLEY HIGH SCHOOL, FOLEY, AL");
    }

    #[test]
    fn test_search_returns_whole_corpus() {
        let engine = engine(&sample_records());
        assert_eq!(engine.search("monroe").len(), 3);
    }

    #[test]
    fn test_top_k_truncates() {
        let engine = engine(&sample_records());
        assert_eq!(engine.search_top_k("school", 2).len(), 2);
        assert_eq!(engine.search_top_k("school", 10).len(), 3);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let records = vec![
            SchoolRecord::new("LINCOLN SCHOOL", "AMES", "IA"),
            SchoolRecord::new("LINCOLN SCHOOL", "PELLA", "IA"),
            SchoolRecord::new("LINCOLN SCHOOL", "ADEL", "IA"),
        ];
        let engine = engine(&records);

        let results = engine.search("lincoln");
        assert_eq!(results[0], "LINCOLN SCHOOL, AMES, IA");
        assert_eq!(results[1], "LINCOLN SCHOOL, PELLA, IA");
        assert_eq!(results[2], "LINCOLN SCHOOL, ADEL, IA");
    }

    #[test]
    fn test_repeated_searches_are_deterministic() {
        let engine = engine(&sample_records());
        let first = engine.search_scored("high school ia");
        for _ in 0..5 {
            assert_eq!(engine.search_scored("high school ia"), first);
        }
    }

    #[test]
    fn test_empty_query_scores_everything_zero() {
        let engine = engine(&sample_records());
        let results = engine.search_scored("");
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|&(_, score)| score == 0.0));
        // Zero scores across the board fall back to corpus order.
        assert_eq!(results[0].0, "MONROE ELEMENTARY SCHOOL, MONROE, IA");
    }

    #[test]
    fn test_engine_shares_corpus() {
        let normalizer = Normalizer::builtin();
        let records = sample_records();
        let corpus = Arc::new(Corpus::from_records(records.iter(), &normalizer));

        let a = SearchEngine::new(corpus.clone());
        let b = SearchEngine::new(corpus);
        assert_eq!(a.search("monroe"), b.search("monroe"));
    }
}
