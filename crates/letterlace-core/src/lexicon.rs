//! Dictionary membership for prefix-pruned search.

use std::collections::HashSet;

/// The set of valid words together with the set of all their prefixes.
///
/// Both sets hold normalized (trimmed, uppercased) strings. The prefix set
/// contains every character-boundary prefix of every word, including the word
/// itself, so `words ⊆ prefixes` always holds. Membership in the prefix set
/// is what lets the search abandon a branch as soon as the accumulated
/// letters can no longer extend to any word.
///
/// A lexicon is built once and immutable afterwards; building from empty
/// input yields a degenerate lexicon against which every search finds
/// nothing. That is a valid (if unhelpful) state, not an error — callers
/// that need to distinguish "no dictionary yet" from "empty dictionary"
/// track that separately.
///
/// # Examples
///
/// ```
/// use letterlace_core::Lexicon;
///
/// let lexicon = Lexicon::build(["cat", "ca", "dog"]);
///
/// // "ca" is dropped: words must be at least three characters
/// assert_eq!(lexicon.word_count(), 2);
/// assert!(lexicon.contains("CAT"));
/// assert!(!lexicon.contains("CA"));
///
/// // ...but every prefix of a kept word is known
/// assert!(lexicon.is_prefix("C"));
/// assert!(lexicon.is_prefix("CA"));
/// assert!(lexicon.is_prefix("DO"));
/// assert!(!lexicon.is_prefix("X"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<Box<str>>,
    prefixes: HashSet<Box<str>>,
}

impl Lexicon {
    /// The minimum word length (in characters) kept by [`build`](Self::build).
    pub const MIN_WORD_LEN: usize = 3;

    /// Builds a lexicon from raw word-list entries.
    ///
    /// Each entry is trimmed and uppercased; entries shorter than
    /// [`MIN_WORD_LEN`](Self::MIN_WORD_LEN) characters after trimming are
    /// discarded. Duplicates are absorbed by set semantics.
    pub fn build<I>(raw_words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for raw in raw_words {
            let word = raw.as_ref().trim().to_uppercase();
            if word.chars().count() < Self::MIN_WORD_LEN {
                continue;
            }
            for (i, ch) in word.char_indices() {
                let prefix = &word[..i + ch.len_utf8()];
                if !lexicon.prefixes.contains(prefix) {
                    lexicon.prefixes.insert(prefix.into());
                }
            }
            lexicon.words.insert(word.into());
        }
        lexicon
    }

    /// Builds a lexicon from a newline-delimited word list.
    ///
    /// This is the shape dictionary sources arrive in: one word per line,
    /// arbitrary case and surrounding whitespace, UTF-8.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::build(text.lines())
    }

    /// Returns `true` if `word` is a valid word.
    ///
    /// The lookup is exact: callers pass normalized (uppercase) text, which
    /// is all the search ever accumulates.
    #[must_use]
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns `true` if `partial` is a prefix of at least one valid word.
    #[must_use]
    #[inline]
    pub fn is_prefix(&self, partial: &str) -> bool {
        self.prefixes.contains(partial)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the lexicon holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
