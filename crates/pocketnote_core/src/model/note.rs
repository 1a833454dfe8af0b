//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted record shape.
//! - Provide id assignment and creation-time stamping helpers.
//!
//! # Invariants
//! - `id` is unique within one store and monotonically assigned.
//! - `created_at` is set once at construction and never mutated.
//! - Wire field names (`text`, `date`) match the persisted blob layout.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for a note within one store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// A single user-created note.
///
/// Title and body are unconstrained text; either may be empty and the body
/// may span multiple lines. Equality is full structural equality, which the
/// store's delete contract relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Monotonically assigned id, unique within the store.
    pub id: NoteId,
    /// Headline text. May be empty.
    pub title: String,
    /// Serialized as `text` to match the persisted blob schema.
    #[serde(rename = "text")]
    pub body: String,
    /// Creation time in Unix epoch milliseconds. Serialized as `date`.
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl Note {
    /// Creates a note stamped with the current wall-clock time.
    ///
    /// The caller supplies the id; use [`next_note_id`] against the current
    /// sequence to honor the monotonic-assignment invariant.
    pub fn new(id: NoteId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_created_at(id, title, body, now_epoch_ms())
    }

    /// Creates a note with a caller-provided creation timestamp.
    ///
    /// Used by deterministic construction paths (tests, imports).
    pub fn with_created_at(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at,
        }
    }
}

/// Returns the next id for a sequence of existing notes.
///
/// # Contract
/// - Next id = max existing id (or 0 for an empty sequence) + 1.
/// - Ids retired by deletion are never reused: the maximum never decreases
///   below any id that was ever handed out while those notes remain.
pub fn next_note_id(notes: &[Note]) -> NoteId {
    notes.iter().map(|note| note.id).max().unwrap_or(0) + 1
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
