//! Key-value rows backing saved snapshots and the working draft.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM snapshots WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Insert or overwrite the value stored under `key`.
pub fn put_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO snapshots (key, value, saved_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, saved_at = excluded.saved_at",
        params![key, value, now],
    )?;
    Ok(())
}

/// Keys starting with `prefix`, sorted.
pub fn keys_with_prefix(conn: &Connection, prefix: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT key FROM snapshots
         WHERE substr(key, 1, length(?1)) = ?1
         ORDER BY key ASC",
    )?;

    let rows = stmt.query_map([prefix], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
