//! AI summary collaborator seam.
//!
//! # Responsibility
//! - Define the summarization contract the controller calls.
//! - Ship the placeholder implementation used until a real service exists.
//!
//! # Invariants
//! - The stub only acknowledges a request; it never produces summary text.

use crate::model::note::Note;

/// External summarization service contract.
///
/// The upstream contract defines no response, timeout, or failure path yet;
/// implementations return the user-facing acknowledgement for the request
/// and nothing else.
pub trait Summarizer {
    /// Starts a summary request for `note` and returns the message to show.
    fn request_summary(&mut self, note: &Note) -> String;
}

/// Placeholder summarizer: acknowledges the request, takes no other action.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSummarizer;

impl Summarizer for StubSummarizer {
    fn request_summary(&mut self, note: &Note) -> String {
        format!(
            "AI summary requested for \"{}\". The summary service is not connected yet.",
            note.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{StubSummarizer, Summarizer};
    use crate::model::note::Note;

    #[test]
    fn stub_acknowledges_with_note_title() {
        let note = Note::new(1, "Grocery List", vec![], "2024-05-21", "milk");
        let message = StubSummarizer.request_summary(&note);
        assert!(message.contains("Grocery List"));
        assert!(message.contains("requested"));
    }
}
