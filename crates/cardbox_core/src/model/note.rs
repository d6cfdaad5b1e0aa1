//! Note domain model.
//!
//! # Responsibility
//! - Define the note record shared by the list and detail views.
//! - Normalize user-entered topic input into clean tags.
//! - Provide the seed fixture every fresh collection starts with.
//!
//! # Invariants
//! - `id` is never reused for another note in the same collection.
//! - `date` is always formatted as `YYYY-MM-DD`.
//! - `topics` keeps insertion order; duplicates are not collapsed.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Unique identifier for a note.
///
/// Assigned from the creation clock in epoch milliseconds. Kept as a type
/// alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// One user note as held in memory and rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique within the owning collection for its whole lifetime.
    pub id: NoteId,
    /// Non-empty display title.
    pub title: String,
    /// Ordered topic tags. Insertion order preserved, duplicates kept.
    pub topics: Vec<String>,
    /// Creation date in `YYYY-MM-DD`.
    pub date: String,
    /// Free-text body, non-empty.
    pub content: String,
}

impl Note {
    /// Creates a note from already-validated parts.
    ///
    /// Validation of title/content emptiness belongs to the store; this
    /// constructor only assembles the record.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        topics: Vec<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            topics,
            date: date.into(),
            content: content.into(),
        }
    }
}

/// Splits raw comma-separated topic input into clean tags.
///
/// Each segment is trimmed; empty and whitespace-only segments are dropped.
/// Order and duplicates are preserved.
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns today's local date formatted as `YYYY-MM-DD`.
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The three sample notes every fresh collection is seeded with.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note::new(
            1,
            "Project Brainstorm",
            vec!["Work".to_string(), "Design".to_string()],
            "2024-05-20",
            "Kickoff ideas: card layout for the landing page, split the\n\
             onboarding flow into three screens, ask design for icons.",
        ),
        Note::new(
            2,
            "Grocery List",
            vec!["Personal".to_string()],
            "2024-05-21",
            "Oat milk, rye bread, coffee beans, lentils, paprika.",
        ),
        Note::new(
            3,
            "TypeScript Tips",
            vec!["Coding".to_string(), "Learning".to_string()],
            "2024-05-22",
            "Prefer discriminated unions over optional flags. `satisfies`\n\
             keeps literal types while checking assignability.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{parse_topics, seed_notes, today_string, Note};

    #[test]
    fn parse_topics_trims_and_drops_empty_segments() {
        assert_eq!(parse_topics("Work, Design,,  "), vec!["Work", "Design"]);
        assert_eq!(parse_topics(""), Vec::<String>::new());
        assert_eq!(parse_topics("  ,  ,"), Vec::<String>::new());
    }

    #[test]
    fn parse_topics_keeps_order_and_duplicates() {
        assert_eq!(parse_topics("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn today_string_is_iso_date_shaped() {
        let today = today_string();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }

    #[test]
    fn seed_notes_match_fixture_shape() {
        let seeds = seed_notes();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].topics, vec!["Work", "Design"]);
        assert_eq!(seeds[1].date, "2024-05-21");
        assert!(seeds.iter().all(|note| !note.content.trim().is_empty()));
    }

    #[test]
    fn note_serializes_with_stable_field_names() {
        let note = Note::new(7, "t", vec!["a".to_string()], "2024-05-20", "body");
        let value = serde_json::to_value(&note).expect("note should serialize");
        assert_eq!(value["id"], 7);
        assert_eq!(value["topics"][0], "a");
        assert_eq!(value["date"], "2024-05-20");
    }
}
