//! Note persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and write the full note sequence as one serialized blob under a
//!   single fixed key in the `kv_store` table.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - `load` never invents data: absent key is `Ok(None)`, a blob that fails
//!   to parse is an error, never an empty sequence.
//! - `save` replaces the whole value; there is no delta persistence.

use crate::db::DbError;
use crate::model::note::Note;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the serialized note sequence is stored.
pub const NOTES_STORAGE_KEY: &str = "notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note blob persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table: {table}"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column: {table}.{column}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract the note store depends on.
///
/// `load` keeps the corrupt-vs-absent distinction visible: the store decides
/// how (whether) to surface it.
pub trait NoteRepository {
    /// Reads the blob at the fixed key.
    ///
    /// Returns `Ok(None)` when no blob has ever been saved, `Ok(Some(notes))`
    /// on successful deserialization, and an error when the blob exists but
    /// cannot be parsed.
    fn load(&self) -> RepoResult<Option<Vec<Note>>>;

    /// Serializes the full sequence and replaces any prior value at the key.
    fn save(&self, notes: &[Note]) -> RepoResult<()>;
}

/// SQLite-backed note repository over the `kv_store` table.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Note>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
        let mut rows = stmt.query([NOTES_STORAGE_KEY])?;

        if let Some(row) = rows.next()? {
            let blob: String = row.get("value")?;
            let notes = serde_json::from_str::<Vec<Note>>(&blob).map_err(|err| {
                RepoError::InvalidData(format!(
                    "blob under key `{NOTES_STORAGE_KEY}` failed to deserialize: {err}"
                ))
            })?;
            return Ok(Some(notes));
        }

        Ok(None)
    }

    fn save(&self, notes: &[Note]) -> RepoResult<()> {
        let blob = serde_json::to_string(notes).map_err(|err| {
            RepoError::InvalidData(format!("note sequence failed to serialize: {err}"))
        })?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![NOTES_STORAGE_KEY, blob],
        )?;

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "kv_store")? {
        return Err(RepoError::MissingRequiredTable("kv_store"));
    }

    for column in ["key", "value"] {
        if !table_has_column(conn, "kv_store", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "kv_store",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
