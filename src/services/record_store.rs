use std::fs;
use std::path::{Path, PathBuf};
use chrono::Local;
use rusqlite::{params, Connection, Row};
use crate::config::constants::{HISTORY_LIMIT, TIMESTAMP_FORMAT};
use crate::errors::StoreResult;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::config::database_config::DatabaseConfig;

const CREATE_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS analyses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    original_code TEXT NOT NULL,
    analysis_result TEXT NOT NULL
)";

/// SQLite-backed history of analyses.
///
/// Every operation opens its own connection and drops it before returning,
/// so the store holds nothing but the database path and is cheap to clone
/// into request handlers.
#[derive(Debug, Clone)]
pub struct RecordStore {
    db_path: PathBuf,
}

impl RecordStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Creates the `analyses` table if it does not exist. Safe to call on every start.
    pub fn initialize(&self) -> StoreResult<()> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let conn = self.connect()?;
        conn.execute(CREATE_TABLE_SQL, [])?;

        log::debug!("🗄️ Analysis store ready at {}", self.db_path.display());
        Ok(())
    }

    /// Inserts a record stamped with the current local time and returns its id.
    pub fn create(&self, code: &str, result: &str) -> StoreResult<i64> {
        let conn = self.connect()?;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        conn.execute(
            "INSERT INTO analyses (timestamp, original_code, analysis_result) VALUES (?1, ?2, ?3)",
            params![timestamp, code, result],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Newest records first. `limit` is clamped to [`HISTORY_LIMIT`].
    pub fn list_recent(&self, limit: usize) -> StoreResult<Vec<AnalysisRecord>> {
        let limit = i64::try_from(limit.min(HISTORY_LIMIT)).unwrap_or(0);
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            "SELECT id, timestamp, original_code, analysis_result
             FROM analyses
             ORDER BY id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit], Self::map_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Returns whether a row was actually removed.
    pub fn delete_one(&self, id: i64) -> StoreResult<bool> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM analyses WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    /// Removes every record and returns how many were removed.
    pub fn delete_all(&self) -> StoreResult<usize> {
        let conn = self.connect()?;
        Ok(conn.execute("DELETE FROM analyses", [])?)
    }

    fn map_record(row: &Row<'_>) -> rusqlite::Result<AnalysisRecord> {
        Ok(AnalysisRecord {
            id: row.get("id")?,
            timestamp: row.get("timestamp")?,
            original_code: row.get("original_code")?,
            analysis_result: row.get("analysis_result")?,
        })
    }
}
