//! Note store: the authoritative in-memory note sequence.
//!
//! # Responsibility
//! - Own the ordered note list for the process lifetime.
//! - Mirror the full sequence to the repository after every mutation.
//!
//! # Invariants
//! - Newest note is always at position 0.
//! - Ids are assigned monotonically (`max + 1`) and never reused.
//! - Persistence is best-effort: load and save failures never reach the
//!   caller; in-memory state stays authoritative until process exit.

use crate::model::note::{next_note_id, Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use log::{info, warn};

/// In-memory authoritative note collection over a storage backend.
///
/// Exactly one instance is expected per process, constructed at startup and
/// passed by reference to whatever drives add/delete. Single-threaded by
/// contract; every operation runs to completion synchronously.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Loads persisted notes and builds the store around them.
    ///
    /// Fail-open: an absent blob and a corrupt blob both yield an empty
    /// sequence. The distinction is logged but never surfaced.
    pub fn initialize(repo: R) -> Self {
        let notes = match repo.load() {
            Ok(Some(notes)) => notes,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=notes_load_failed module=store status=recovered error={err}");
                Vec::new()
            }
        };
        info!(
            "event=store_init module=store status=ok count={}",
            notes.len()
        );

        Self { repo, notes }
    }

    /// Creates a note at the head of the sequence and persists.
    ///
    /// # Contract
    /// - Fresh id = max existing id (or 0) + 1.
    /// - `created_at` is stamped with the current time.
    /// - No validation: empty title and body are accepted.
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> Note {
        let note = Note::new(next_note_id(&self.notes), title, body);
        self.notes.insert(0, note.clone());
        info!(
            "event=note_add module=store status=ok id={} count={}",
            note.id,
            self.notes.len()
        );
        self.persist("note_add");
        note
    }

    /// Removes every note equal to `note` by full value, then persists.
    ///
    /// Matches the legacy contract of the long-press-confirm flow. When
    /// nothing matches this is a silent no-op and no write is issued.
    pub fn delete(&mut self, note: &Note) {
        self.remove_where(|existing| existing == note, "note_delete");
    }

    /// Removes the note with the given id, then persists.
    ///
    /// Equivalent, clearer contract: ids are unique, so at most one note is
    /// removed. Silent no-op when the id is absent.
    pub fn delete_by_id(&mut self, id: NoteId) {
        self.remove_where(|existing| existing.id == id, "note_delete");
    }

    /// Read-only snapshot of the current sequence, newest first.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn remove_where(&mut self, mut matches: impl FnMut(&Note) -> bool, event: &str) {
        let before = self.notes.len();
        self.notes.retain(|existing| !matches(existing));
        let removed = before - self.notes.len();
        if removed == 0 {
            return;
        }

        info!(
            "event={event} module=store status=ok removed={removed} count={}",
            self.notes.len()
        );
        self.persist(event);
    }

    fn persist(&self, event: &str) {
        if let Err(err) = self.repo.save(&self.notes) {
            warn!("event=notes_save_failed module=store status=ignored after={event} error={err}");
        }
    }
}
