//! Core domain logic for Pocketnote.
//! This crate is the single source of truth for the note lifecycle and its
//! persistence contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{next_note_id, Note, NoteId};
pub use repo::note_repo::{
    NoteRepository, RepoError, RepoResult, SqliteNoteRepository, NOTES_STORAGE_KEY,
};
pub use service::note_store::NoteStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
