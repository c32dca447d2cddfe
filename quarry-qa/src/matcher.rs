use std::fmt;
use strsim::normalized_levenshtein;

/// The search query, built once from the command-line words and read-only
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Join the given words with single spaces (no trailing space).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Threshold policy over the similarity score.
///
/// Scoring delegates to `strsim`'s normalized Levenshtein, which maps two
/// strings onto `[0, 1]`. The threshold comparison is inclusive: a score of
/// exactly the threshold is a match.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    threshold: f64,
}

impl MatchPolicy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `title` against the query and decide whether it matches.
    pub fn judge(&self, query: &Query, title: &str) -> MatchDecision {
        let score = normalized_levenshtein(query.as_str(), title);
        MatchDecision {
            score,
            matched: score >= self.threshold,
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

/// Outcome of judging one candidate title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchDecision {
    pub score: f64,
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_join_with_single_spaces() {
        let query = Query::from_words(["how", "to", "sort", "array"]);
        assert_eq!(query.as_str(), "how to sort array");
    }

    #[test]
    fn single_word_has_no_trailing_space() {
        let query = Query::from_words(["reverse"]);
        assert_eq!(query.as_str(), "reverse");
    }

    #[test]
    fn identical_title_scores_one() {
        let policy = MatchPolicy::default();
        let query = Query::from_words(["reverse", "a", "string"]);
        let decision = policy.judge(&query, "reverse a string");
        assert_eq!(decision.score, 1.0);
        assert!(decision.matched);
    }

    #[test]
    fn unrelated_title_is_rejected() {
        let policy = MatchPolicy::default();
        let query = Query::from_words(["xyzzy", "unrelated", "term"]);
        let decision = policy.judge(&query, "How to center a div");
        assert!(decision.score < 0.5);
        assert!(!decision.matched);
    }

    #[test]
    fn threshold_is_inclusive() {
        // One edit over two characters: normalized Levenshtein is exactly 0.5.
        let policy = MatchPolicy::new(0.5);
        let decision = policy.judge(&Query::from_words(["ab"]), "ax");
        assert_eq!(decision.score, 0.5);
        assert!(decision.matched);
    }

    #[test]
    fn below_threshold_is_rejected() {
        // Three edits over four characters: 0.25.
        let policy = MatchPolicy::new(0.5);
        let decision = policy.judge(&Query::from_words(["abcd"]), "axyz");
        assert!(decision.score < 0.5);
        assert!(!decision.matched);
    }
}
