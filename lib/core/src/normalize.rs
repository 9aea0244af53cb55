//! Text normalization into canonical token sets
//!
//! Turns a raw free-text string (a record field or a search query) into a
//! set of canonical uppercase tokens. The same pipeline runs on both sides
//! of a search so lexical variants land on identical tokens.

use crate::lexicon::Lexicon;
use ahash::AHashSet;

/// An unordered set of unique canonical tokens derived from one text source.
pub type TokenSet = AHashSet<String>;

/// Normalizes raw text into a [`TokenSet`] using a [`Lexicon`].
///
/// The pipeline, per input string:
///
/// 1. Uppercase.
/// 2. Replace every ASCII punctuation character with a space. This can split
///    words: "JR-SR" becomes two tokens, not one.
/// 3. Split on whitespace, discarding empty fragments.
/// 4. For each raw word, apply exactly one of, in order:
///    stemming expansion, state-name abbreviation, stop-word removal,
///    or pass-through.
///
/// Substituted words are not re-run through the tables, and duplicates
/// collapse in the resulting set. Any input is valid; empty input yields an
/// empty set.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Lexicon,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Normalizer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// A normalizer over the standard built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin().clone())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize `text` into its canonical token set.
    pub fn normalize(&self, text: &str) -> TokenSet {
        let cleaned: String = text
            .to_uppercase()
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect();

        let mut tokens = TokenSet::new();
        for word in cleaned.split_whitespace() {
            if let Some(canonical) = self.lexicon.stem(word) {
                tokens.insert(canonical.to_string());
            } else if let Some(abbrev) = self.lexicon.state_abbreviation(word) {
                tokens.insert(abbrev.to_string());
            } else if !self.lexicon.is_stop_word(word) {
                tokens.insert(word.to_string());
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_set(words: &[&str]) -> TokenSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_normalize_empty() {
        let normalizer = Normalizer::builtin();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   ").is_empty());
        assert!(normalizer.normalize("...---...").is_empty());
    }

    #[test]
    fn test_normalize_middle_school() {
        let normalizer = Normalizer::builtin();
        assert_eq!(
            normalizer.normalize("WINTERSET MIDDLE SCHOOL, WINTERSET, IA"),
            token_set(&["IA", "MIDDLE", "SCHOOL", "WINTERSET"])
        );
    }

    #[test]
    fn test_normalize_punctuation_splits_words() {
        // "JR-SR" must break into two tokens, each stemmed on its own.
        let normalizer = Normalizer::builtin();
        assert_eq!(
            normalizer.normalize("TWIN CEDARS JR-SR HIGH SCHOOL, BUSSEY, IA"),
            token_set(&[
                "HIGH", "SCHOOL", "CEDARS", "IA", "BUSSEY", "SENIOR", "TWIN", "JUNIOR"
            ])
        );
    }

    #[test]
    fn test_normalize_uppercases_input() {
        let normalizer = Normalizer::builtin();
        assert_eq!(
            normalizer.normalize("monroe elementary school ia"),
            token_set(&["MONROE", "ELEMENTARY", "SCHOOL", "IA"])
        );
    }

    #[test]
    fn test_normalize_drops_stop_words() {
        let normalizer = Normalizer::builtin();
        assert_eq!(
            normalizer.normalize("THE ACADEMY OF ARTS AT RIVERSIDE"),
            token_set(&["ACADEMY", "ARTS", "RIVERSIDE"])
        );
    }

    #[test]
    fn test_normalize_state_names() {
        let normalizer = Normalizer::builtin();
        assert_eq!(
            normalizer.normalize("FOLEY HIGH ALABAMA"),
            token_set(&["FOLEY", "HIGH", "AL"])
        );
    }

    #[test]
    fn test_normalize_collapses_duplicates() {
        let normalizer = Normalizer::builtin();
        assert_eq!(
            normalizer.normalize("SCHOOL SCH SCHOOLS SCHL"),
            token_set(&["SCHOOL"])
        );
    }

    #[test]
    fn test_normalize_no_recursive_substitution() {
        // SAINT is a stemming value; a custom table maps it onward. The
        // output of one substitution must not feed back into the tables.
        let lexicon = Lexicon::new(
            [
                ("ST".to_string(), "SAINT".to_string()),
                ("SAINT".to_string(), "HOLY".to_string()),
            ],
            std::iter::empty::<String>(),
            std::iter::empty::<(String, String)>(),
        );
        let normalizer = Normalizer::new(lexicon);
        assert_eq!(normalizer.normalize("ST"), token_set(&["SAINT"]));
    }

    #[test]
    fn test_stemming_takes_precedence_over_state_table() {
        // A word keyed in both tables resolves through stemming.
        let lexicon = Lexicon::new(
            [("GEORGIA".to_string(), "PEACH".to_string())],
            std::iter::empty::<String>(),
            [("GEORGIA".to_string(), "GA".to_string())],
        );
        let normalizer = Normalizer::new(lexicon);
        assert_eq!(normalizer.normalize("GEORGIA"), token_set(&["PEACH"]));
    }

    #[test]
    fn test_canonical_tokens_are_fixed_points() {
        // Re-normalizing any token produced by the builtin tables must
        // yield that token back.
        let normalizer = Normalizer::builtin();
        for text in ["ELEM SCH JR SR MT ST", "IOWA CALIFORNIA TEXAS"] {
            for token in normalizer.normalize(text) {
                assert_eq!(normalizer.normalize(&token), token_set(&[token.as_str()]));
            }
        }
    }
}
