//! match_cache CRUD queries.

use rusqlite::{params, Connection};

use synastry_core::errors::StorageError;

/// One persisted cache row, result still serialized.
#[derive(Debug, Clone)]
pub struct CacheRow {
    pub user_combo: String,
    pub partner_combo: String,
    pub result_json: String,
    pub cached_at: u64,
}

/// Load the most recent rows, newest first.
pub fn load_recent(conn: &Connection, limit: usize) -> Result<Vec<CacheRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT user_combo, partner_combo, result_json, cached_at
             FROM match_cache
             ORDER BY cached_at DESC
             LIMIT ?1",
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(CacheRow {
                user_combo: row.get(0)?,
                partner_combo: row.get(1)?,
                result_json: row.get(2)?,
                cached_at: row.get::<_, i64>(3)? as u64,
            })
        })
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?);
    }
    Ok(result)
}

/// Insert or replace one entry for a directional key pair.
pub fn upsert_entry(conn: &Connection, row: &CacheRow) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO match_cache
             (user_combo, partner_combo, result_json, cached_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            row.user_combo,
            row.partner_combo,
            row.result_json,
            row.cached_at as i64
        ],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Delete everything but the `keep` most recent entries.
pub fn trim_to(conn: &Connection, keep: usize) -> Result<usize, StorageError> {
    let deleted = conn
        .execute(
            "DELETE FROM match_cache
             WHERE (user_combo, partner_combo) NOT IN (
                 SELECT user_combo, partner_combo FROM match_cache
                 ORDER BY cached_at DESC
                 LIMIT ?1
             )",
            params![keep as i64],
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(deleted)
}

/// Delete entries older than the cutoff timestamp.
pub fn purge_older_than(conn: &Connection, cutoff: u64) -> Result<usize, StorageError> {
    let deleted = conn
        .execute(
            "DELETE FROM match_cache WHERE cached_at < ?1",
            params![cutoff as i64],
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(deleted)
}

/// Count cached entries.
pub fn count_entries(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM match_cache", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}

/// Delete every cached entry.
pub fn clear(conn: &Connection) -> Result<(), StorageError> {
    conn.execute("DELETE FROM match_cache", [])
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(())
}
