//! Play-session management for the word-trace game.
//!
//! This crate ties the core pieces together the way an interactive front end
//! needs them: a [`GameSession`] owns the board entries, the bonus-cell
//! selection, and the dictionary's readiness state, and exposes a
//! [`solve`](GameSession::solve) operation that refuses to run until the
//! dictionary is fully built.
//!
//! Dictionary acquisition itself (a download, a file read) is an external
//! collaborator; it reports back through
//! [`install_dictionary`](GameSession::install_dictionary) or
//! [`dictionary_failed`](GameSession::dictionary_failed), and the session
//! never searches against a partial or absent lexicon.
//!
//! # Examples
//!
//! ```
//! use letterlace_core::Lexicon;
//! use letterlace_game::{GameError, GameSession};
//!
//! let mut session = GameSession::new(3);
//! for (index, letter) in ["C", "A", "T"].into_iter().enumerate() {
//!     session.set_entry(index, letter)?;
//! }
//!
//! // Solving before the dictionary arrives is a precondition violation
//! assert_eq!(session.solve().unwrap_err(), GameError::DictionaryNotReady);
//!
//! session.install_dictionary(Lexicon::build(["cat"]));
//! let outcome = session.solve()?;
//! assert_eq!(outcome.words()[0].word, "CAT");
//! assert_eq!(outcome.words()[0].score, 1);
//! # Ok::<(), letterlace_game::GameError>(())
//! ```

mod dictionary;
mod session;

pub use self::{
    dictionary::DictionaryState,
    session::{GameError, GameSession, ScoredWord, SolveOutcome},
};
