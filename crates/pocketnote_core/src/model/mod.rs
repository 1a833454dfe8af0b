//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note record used by core business logic.
//! - Keep id assignment rules next to the data they govern.
//!
//! # Invariants
//! - Every note is identified by a stable integer `NoteId`.
//! - Deleted ids are retired permanently, never reissued.

pub mod note;
