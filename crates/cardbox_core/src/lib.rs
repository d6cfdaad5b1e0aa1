//! Core domain logic for Cardbox.
//!
//! Owns the note collection, validation, and view-state transitions; every
//! front-end consumes this crate instead of holding business rules itself.

pub mod controller;
pub mod logging;
pub mod model;
pub mod store;
pub mod summary;

pub use controller::note_controller::{
    CardView, CreateForm, DetailView, FormField, NoteController, Notifier, ViewState,
};
pub use logging::{default_log_level, init_logging};
pub use model::note::{parse_topics, seed_notes, today_string, Note, NoteId};
pub use store::note_store::{NoteStore, ValidationError};
pub use summary::{StubSummarizer, Summarizer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
