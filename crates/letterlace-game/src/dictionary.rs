//! Dictionary readiness tracking.

use letterlace_core::Lexicon;

/// The lifecycle of the session's dictionary.
///
/// The dictionary starts [`Pending`](Self::Pending) and moves to
/// [`Ready`](Self::Ready) once the acquisition collaborator delivers a fully
/// built [`Lexicon`], or to [`Unavailable`](Self::Unavailable) if it fails.
/// A search never runs in any state but `Ready`: an absent dictionary is
/// "not ready", never "ready with zero words".
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum DictionaryState {
    /// Acquisition has not completed yet.
    #[default]
    Pending,
    /// The lexicon is fully built and searchable.
    Ready(Lexicon),
    /// The acquisition collaborator reported failure.
    Unavailable {
        /// The collaborator's failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        assert!(DictionaryState::default().is_pending());
    }

    #[test]
    fn test_variant_queries() {
        let ready = DictionaryState::Ready(Lexicon::build(["cat"]));
        assert!(ready.is_ready());
        assert!(!ready.is_pending());

        let failed = DictionaryState::Unavailable {
            reason: "fetch failed".into(),
        };
        assert!(failed.is_unavailable());
    }
}
