//! Append-only note store.
//!
//! # Responsibility
//! - Hold the process-lifetime note collection in memory.
//! - Construct new notes (id, date, parsed topics) from raw form input.
//!
//! # Invariants
//! - The collection is seeded with the three sample notes and never shrinks.
//! - `add_note` appends at the end; list order is insertion order.
//! - Validation failures do not mutate the collection.

use crate::model::note::{parse_topics, seed_notes, today_string, Note, NoteId};
use chrono::Utc;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Save-time validation failure for a required text field.
///
/// Handled entirely at the save call site: surfaced to the user through the
/// notification collaborator, never logged or escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Content is empty or whitespace-only.
    EmptyContent,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Insertion-ordered, append-only collection of notes.
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates a store pre-populated with the three sample notes.
    pub fn seeded() -> Self {
        Self {
            notes: seed_notes(),
        }
    }

    /// Validates raw form input and appends a new note.
    ///
    /// The note is constructed with an id from the creation clock, today's
    /// date, and topics parsed from comma-separated input. On success the
    /// note is appended at the end of the collection and a borrow of the
    /// stored record is returned.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when `title` trims to empty.
    /// - `ValidationError::EmptyContent` when `content` trims to empty.
    pub fn add_note(
        &mut self,
        title: &str,
        topics_raw: &str,
        content: &str,
    ) -> Result<&Note, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let note = Note::new(
            self.next_id(),
            title,
            parse_topics(topics_raw),
            today_string(),
            content,
        );
        info!(
            "event=note_added module=store status=ok id={} topic_count={} total={}",
            note.id,
            note.topics.len(),
            self.notes.len() + 1
        );
        self.notes.push(note);
        Ok(self.notes.last().expect("note was just pushed"))
    }

    /// Returns all notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Looks up one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Next id from the creation clock, in epoch milliseconds.
    ///
    /// Two saves can land in the same millisecond; ids are bumped past the
    /// newest existing id so they stay strictly increasing.
    fn next_id(&self) -> NoteId {
        let clock_id = Utc::now().timestamp_millis();
        let newest = self.notes.iter().map(|note| note.id).max().unwrap_or(0);
        clock_id.max(newest + 1)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::seeded()
    }
}
