use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{info, warn};

use super::db;
use super::workout_log::SavedWorkoutLog;

/// Key holding the JSON array of saved workout logs.
pub const TRACKED_WORKOUTS_KEY: &str = "trackedWorkouts";

/// Saved workout logs, persisted as one JSON array in the key-value table.
///
/// Every append reads the whole list and writes it back. Passed explicitly
/// to the views that need it.
pub struct LogStore {
    conn: Connection,
}

impl LogStore {
    /// Open the store in the default database.
    pub fn open() -> Result<Self> {
        Self::from_connection(db::open_db()?)
    }

    /// Wrap an existing connection, creating the schema if needed.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        db::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// All saved logs in the order they were saved.
    ///
    /// A missing or unreadable value counts as an empty list.
    pub fn load_logs(&self) -> Result<Vec<SavedWorkoutLog>> {
        let raw = db::get_value(&self.conn, TRACKED_WORKOUTS_KEY)?;
        Ok(match raw {
            None => Vec::new(),
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(error = %e, "stored workout logs are corrupt, starting a fresh list");
                Vec::new()
            }),
        })
    }

    /// Append one log and rewrite the stored list.
    pub fn append_log(&mut self, log: &SavedWorkoutLog) -> Result<usize> {
        let mut logs = self.load_logs()?;
        logs.push(log.clone());

        let json = serde_json::to_string(&logs).context("Failed to serialize workout logs")?;
        db::put_value(&self.conn, TRACKED_WORKOUTS_KEY, &json)?;

        info!(id = log.id, name = %log.name, total = logs.len(), "saved workout log");
        Ok(logs.len())
    }

    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self::from_connection(Connection::open_in_memory().unwrap()).unwrap()
    }

    #[cfg(test)]
    pub(crate) fn put_raw(&self, json: &str) {
        db::put_value(&self.conn, TRACKED_WORKOUTS_KEY, json).unwrap();
    }
}
