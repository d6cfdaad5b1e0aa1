//! Domain model for note records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep parsing of user-entered topic input next to the record shape.
//!
//! # Invariants
//! - Every note is identified by an `id` unique within its collection.
//! - Notes are immutable after construction; no edit operation exists.

pub mod note;
