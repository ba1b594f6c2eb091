//! Leaderboard: durable ranked record of past rounds, backed by SQLite.
//!
//! Persistence faults are the one error class the core surfaces: a failed
//! write must reach the UI so the player can retry, instead of silently
//! dropping a score.

use rusqlite::Connection;
use thiserror::Error;

use crate::core::session::Score;

/// Persistence failure, distinguishable at the UI boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("leaderboard database error: {0}")]
    Database(#[from] rusqlite::Error),
}

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS leaderboard (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        team_name TEXT NOT NULL,
        blocks_removed INTEGER NOT NULL,
        time_remaining REAL NOT NULL,
        total_score INTEGER NOT NULL,
        timestamp REAL NOT NULL
    )";

/// SQLite-backed leaderboard store.
pub struct Leaderboard {
    conn: Connection,
}

impl Leaderboard {
    /// Open (and create if absent) the database at `path`.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory store, for tests and for running without a writable disk.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE, [])?;
        Ok(Self { conn })
    }

    /// Append one score. Committed on return.
    pub fn add(&mut self, score: &Score) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO leaderboard
                 (team_name, blocks_removed, time_remaining, total_score, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                score.team_name,
                score.blocks_removed,
                score.time_remaining,
                score.total_score,
                score.timestamp,
            ],
        )?;
        Ok(())
    }

    /// Best scores, highest total first; ties keep insertion order.
    pub fn top_scores(&self, limit: usize) -> Result<Vec<Score>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT team_name, blocks_removed, time_remaining, total_score, timestamp
             FROM leaderboard
             ORDER BY total_score DESC, id ASC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(Score {
                team_name: row.get(0)?,
                blocks_removed: row.get(1)?,
                time_remaining: row.get(2)?,
                total_score: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }
}
