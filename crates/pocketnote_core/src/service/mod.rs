//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the note lifecycle API.
//! - Keep callers (UI shells, smoke binaries) decoupled from storage details.

pub mod note_store;
