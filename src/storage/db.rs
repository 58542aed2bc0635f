use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

/// Open (or create) the SQLite database at the configured path.
pub fn open_db() -> Result<Connection> {
    open_db_at(&crate::paths::db_path())
}

/// Open (or create) a database file, creating its parent directory as needed.
pub fn open_db_at(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database: {}", path.display()))?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .context("Failed to set database pragmas")?;

    init_schema(&conn)?;
    Ok(conn)
}

/// Create tables if they don't exist. Idempotent.
///
/// The app keeps its persisted state as whole JSON documents under string
/// keys, the same way a browser's local storage would.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .context("Failed to initialize database schema")?;

    Ok(())
}

/// Read the raw value stored under `key`.
pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
        .optional()
        .with_context(|| format!("Failed to read key: {key}"))
}

/// Replace the value stored under `key`.
pub fn put_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET
            value = ?2,
            updated_at = datetime('now')",
        rusqlite::params![key, value],
    )
    .with_context(|| format!("Failed to write key: {key}"))?;

    Ok(())
}
