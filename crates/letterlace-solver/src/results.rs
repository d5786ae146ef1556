//! Per-word result aggregation and the presentation ordering.

use std::collections::{HashMap, hash_map::Entry};

use letterlace_core::{Position, TracePath};

use crate::score;

/// A word found by the search, together with one exemplar path.
///
/// The path records how the word was traced (for later highlighting), and
/// `uses_bonus` whether any of its cells is the grid's bonus cell. The search
/// makes no claim about finding the "best" path for a word — just *a* path,
/// with bonus usage as the sole preference (see [`WordResults::insert`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    word: Box<str>,
    path: TracePath,
    uses_bonus: bool,
}

impl FoundWord {
    /// Creates a found-word candidate.
    #[must_use]
    pub fn new(word: impl Into<Box<str>>, path: TracePath, uses_bonus: bool) -> Self {
        Self {
            word: word.into(),
            path,
            uses_bonus,
        }
    }

    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the word length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }

    /// Returns the exemplar path the word was traced through.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Returns `true` if the exemplar path crosses the bonus cell.
    #[must_use]
    pub const fn uses_bonus(&self) -> bool {
        self.uses_bonus
    }

    /// Returns the word's point value.
    #[must_use]
    pub fn score(&self) -> u32 {
        score(self.char_len(), self.uses_bonus)
    }
}

/// Deduplicated search results, one [`FoundWord`] per distinct word.
///
/// Candidates are merged by the retention rule described on
/// [`insert`](Self::insert); [`sorted_view`](Self::sorted_view) exposes the
/// presentation order. Entries are never removed within one solve.
///
/// # Examples
///
/// ```
/// use letterlace_core::Position;
/// use letterlace_solver::{FoundWord, WordResults};
///
/// let mut results = WordResults::new();
/// results.insert(FoundWord::new("CAT", vec![Position::new(0, 0)], false));
/// results.insert(FoundWord::new("CAT", vec![Position::new(1, 1)], true));
///
/// // The bonus-using path replaced the first one
/// assert_eq!(results.len(), 1);
/// assert!(results.get("CAT").unwrap().uses_bonus());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordResults {
    entries: HashMap<Box<str>, FoundWord>,
}

impl WordResults {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate, applying the retention rule.
    ///
    /// The first-seen path for a word is kept, unless a later candidate uses
    /// the bonus cell while the kept one does not — then the candidate
    /// replaces it. When several bonus-using paths spell the same word, the
    /// first one found wins; which one that is depends on search order and is
    /// implementation-defined.
    pub fn insert(&mut self, candidate: FoundWord) {
        match self.entries.entry(candidate.word.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
            Entry::Occupied(mut entry) => {
                if candidate.uses_bonus && !entry.get().uses_bonus {
                    entry.insert(candidate);
                }
            }
        }
    }

    /// Returns the retained entry for a word, if the word was found.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&FoundWord> {
        self.entries.get(word)
    }

    /// Returns the number of distinct words found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no words were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the retained entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.entries.values()
    }

    /// Returns all entries in presentation order: descending word length,
    /// ties broken by ascending lexicographic order.
    ///
    /// This ordering is a contract — output comparisons rely on it being
    /// reproduced exactly.
    #[must_use]
    pub fn sorted_view(&self) -> Vec<&FoundWord> {
        let mut view: Vec<_> = self.entries.values().collect();
        view.sort_by(|a, b| b.char_len().cmp(&a.char_len()).then_with(|| a.word.cmp(&b.word)));
        view
    }

    /// Consumes the set, returning owned entries in presentation order.
    #[must_use]
    pub fn into_sorted(self) -> Vec<FoundWord> {
        let mut entries: Vec<_> = self.entries.into_values().collect();
        entries.sort_by(|a, b| b.char_len().cmp(&a.char_len()).then_with(|| a.word.cmp(&b.word)));
        entries
    }
}

impl Extend<FoundWord> for WordResults {
    fn extend<T: IntoIterator<Item = FoundWord>>(&mut self, iter: T) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

impl FromIterator<FoundWord> for WordResults {
    /// Folds raw candidates through the retention rule.
    fn from_iter<T: IntoIterator<Item = FoundWord>>(iter: T) -> Self {
        let mut results = Self::new();
        results.extend(iter);
        results
    }
}

#[cfg(test)]
mod tests {
    use letterlace_core::Position;

    use super::*;

    fn found(word: &str, uses_bonus: bool) -> FoundWord {
        FoundWord::new(word, vec![Position::new(0, 0)], uses_bonus)
    }

    #[test]
    fn test_first_path_is_kept() {
        let mut results = WordResults::new();
        let first = FoundWord::new("CAT", vec![Position::new(0, 0)], false);
        let second = FoundWord::new("CAT", vec![Position::new(1, 1)], false);
        results.insert(first.clone());
        results.insert(second);
        assert_eq!(results.get("CAT"), Some(&first));
    }

    #[test]
    fn test_bonus_path_replaces_plain_path() {
        let mut results = WordResults::new();
        results.insert(found("CAT", false));
        results.insert(found("CAT", true));
        assert!(results.get("CAT").unwrap().uses_bonus());
    }

    #[test]
    fn test_plain_path_never_replaces_bonus_path() {
        let mut results = WordResults::new();
        let bonus = FoundWord::new("CAT", vec![Position::new(0, 0)], true);
        results.insert(bonus.clone());
        results.insert(FoundWord::new("CAT", vec![Position::new(1, 1)], false));
        assert_eq!(results.get("CAT"), Some(&bonus));
    }

    #[test]
    fn test_first_bonus_path_wins_ties() {
        let mut results = WordResults::new();
        let first_bonus = FoundWord::new("CAT", vec![Position::new(0, 0)], true);
        results.insert(first_bonus.clone());
        results.insert(FoundWord::new("CAT", vec![Position::new(2, 2)], true));
        assert_eq!(results.get("CAT"), Some(&first_bonus));
    }

    #[test]
    fn test_sorted_view_orders_by_length_then_alphabet() {
        let results: WordResults = ["TO", "CAT", "ACT", "STONE", "CATS"]
            .into_iter()
            .map(|w| found(w, false))
            .collect();
        let view: Vec<_> = results.sorted_view().iter().map(|f| f.word()).collect();
        assert_eq!(view, ["STONE", "CATS", "ACT", "CAT", "TO"]);
    }

    #[test]
    fn test_into_sorted_matches_sorted_view() {
        let results: WordResults = ["CAT", "DOG", "GOAD"]
            .into_iter()
            .map(|w| found(w, false))
            .collect();
        let view: Vec<String> = results.sorted_view().iter().map(|f| f.word().to_owned()).collect();
        let owned: Vec<String> = results.into_sorted().iter().map(|f| f.word().to_owned()).collect();
        assert_eq!(view, owned);
    }

    #[test]
    fn test_score_uses_char_length() {
        let word = FoundWord::new("ÉTÉ", vec![Position::new(0, 0)], false);
        assert_eq!(word.char_len(), 3);
        assert_eq!(word.score(), 1);
    }
}
