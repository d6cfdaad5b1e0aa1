//! View controller layer.
//!
//! # Responsibility
//! - Own the LIST/DETAIL view-state machine and the creation form.
//! - Translate user actions into store mutations and view models.
//!
//! # Invariants
//! - View state is an explicit enum; both views can never show at once.
//! - Rendering is pure view-model construction with no display handles.

pub mod note_controller;
