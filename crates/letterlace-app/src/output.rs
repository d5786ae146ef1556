//! Result presentation: the text table and the JSON document.

use std::fmt::Write as _;

use letterlace_game::{ScoredWord, SolveOutcome};
use serde::Serialize;

/// A complete solve result, ready for rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// The seed of the generated board, when the board was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// The number of distinct words found.
    pub word_count: usize,
    /// The sum of all word scores.
    pub total_score: u32,
    /// The words in presentation order: longest first, ties alphabetical.
    pub words: Vec<WordEntry>,
}

/// One found word in the report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// The word, normalized uppercase.
    pub word: String,
    /// The word's point value, bonus included.
    pub score: u32,
    /// Whether the word's path crosses the bonus cell.
    pub uses_bonus: bool,
    /// The exemplar path as `[x, y]` coordinate pairs.
    pub path: Vec<(u8, u8)>,
}

impl From<ScoredWord> for WordEntry {
    fn from(word: ScoredWord) -> Self {
        Self {
            path: word.path.iter().map(|pos| (pos.x(), pos.y())).collect(),
            word: word.word,
            score: word.score,
            uses_bonus: word.uses_bonus,
        }
    }
}

impl SolveReport {
    /// Builds a report from a solve outcome.
    #[must_use]
    pub fn new(outcome: SolveOutcome, seed: Option<u64>) -> Self {
        let word_count = outcome.words().len();
        let total_score = outcome.total_score();
        Self {
            seed,
            word_count,
            total_score,
            words: outcome.into_words().into_iter().map(WordEntry::from).collect(),
        }
    }

    /// Renders the word/score table, bonus words marked with `*`.
    #[must_use]
    pub fn render_text(&self) -> String {
        let width = self
            .words
            .iter()
            .map(|entry| entry.word.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for entry in &self.words {
            let marker = if entry.uses_bonus { " *" } else { "" };
            let _ = writeln!(out, "{:<width$}  {:>3}{marker}", entry.word, entry.score);
        }
        let _ = writeln!(out, "{} words, {} points", self.word_count, self.total_score);
        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use letterlace_core::{Lexicon, Position};
    use letterlace_game::GameSession;

    use super::*;

    fn cat_report(bonus: Option<usize>) -> SolveReport {
        let mut session = GameSession::new(3);
        for (index, letter) in ["C", "A", "T"].into_iter().enumerate() {
            session.set_entry(index, letter).unwrap();
        }
        if let Some(index) = bonus {
            session.select_bonus(index).unwrap();
        }
        session.install_dictionary(Lexicon::build(["cat"]));
        SolveReport::new(session.solve().unwrap(), None)
    }

    #[test]
    fn test_text_table_lists_words_and_totals() {
        let text = cat_report(None).render_text();
        assert!(text.contains("CAT"));
        assert!(text.contains("1 words, 1 points"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_text_table_marks_bonus_words() {
        let text = cat_report(Some(0)).render_text();
        assert!(text.contains('*'));
        assert!(text.contains("1 words, 4 points"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(cat_report(Some(0))).unwrap();
        assert_eq!(value["wordCount"], 1);
        assert_eq!(value["totalScore"], 4);
        assert_eq!(value["words"][0]["word"], "CAT");
        assert_eq!(value["words"][0]["usesBonus"], true);
        assert_eq!(value["words"][0]["path"][0], serde_json::json!([0, 0]));
        assert!(value.get("seed").is_none());
    }

    #[test]
    fn test_word_entry_keeps_path_coordinates() {
        let entry = WordEntry::from(ScoredWord {
            word: "CAT".into(),
            score: 1,
            uses_bonus: false,
            path: vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
        });
        assert_eq!(entry.path, [(0, 0), (1, 0), (2, 0)]);
    }
}
