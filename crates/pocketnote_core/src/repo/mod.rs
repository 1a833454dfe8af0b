//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract the note store depends on.
//! - Isolate SQLite and blob-encoding details from service orchestration.
//!
//! # Invariants
//! - The persisted note sequence lives under exactly one fixed key.
//! - Repository APIs keep corrupt-blob failures distinct from "no data";
//!   collapsing them is the store's decision, not the repository's.

pub mod note_repo;
