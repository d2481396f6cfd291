//! Connection opening and PRAGMA configuration.

pub mod pragmas;

use std::path::Path;

use rusqlite::Connection;

use synastry_core::errors::StorageError;

use crate::migrations;

/// Open (or create) the cache database, apply pragmas, run migrations.
pub fn open_cache_db(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path)?;
    pragmas::apply_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database, mainly for tests.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory()?;
    pragmas::apply_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
