use crate::errors::{AppError, AppResult};
use crate::models::{CreatedRun, NewRun, RaffleRun, RunList};
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use uuid::Uuid;

/// Persist a draw (`POST /runs`). Returns the generated id and timestamp.
pub fn save_run(
    conn: &Connection,
    user_id: &str,
    run: &NewRun,
    is_public: Option<bool>,
) -> AppResult<CreatedRun> {
    let run_id = Uuid::new_v4().to_string();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    conn.execute(
        "INSERT INTO runs (run_id, user_id, timestamp, entries, winners, total_entries, is_public)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            run_id,
            user_id,
            timestamp,
            serde_json::to_string(&run.entries)?,
            serde_json::to_string(&run.winners)?,
            run.total_entries,
            is_public,
        ],
    )?;

    Ok(CreatedRun { run_id, timestamp })
}

/// All runs of a user, newest first (`GET /runs`).
pub fn list_runs(conn: &Connection, user_id: &str) -> AppResult<RunList> {
    let mut stmt = conn.prepare(
        "SELECT * FROM runs
         WHERE user_id = ?1
         ORDER BY timestamp DESC, rowid DESC",
    )?;

    let rows = stmt.query_map([user_id], map_row)?;

    let mut runs = Vec::new();
    for r in rows {
        runs.push(r?);
    }
    Ok(RunList { runs })
}

/// One run of a user (`GET /runs/{runId}`), `None` when missing.
pub fn load_run(conn: &Connection, user_id: &str, run_id: &str) -> AppResult<Option<RaffleRun>> {
    let mut stmt = conn.prepare("SELECT * FROM runs WHERE user_id = ?1 AND run_id = ?2")?;
    Ok(stmt
        .query_row(params![user_id, run_id], map_row)
        .optional()?)
}

/// Like [`load_run`], but a missing run is `AppError::RunNotFound`.
pub fn require_run(conn: &Connection, user_id: &str, run_id: &str) -> AppResult<RaffleRun> {
    load_run(conn, user_id, run_id)?.ok_or_else(|| AppError::RunNotFound(run_id.to_string()))
}

pub fn map_row(row: &Row) -> Result<RaffleRun> {
    let entries_json: String = row.get("entries")?;
    let winners_json: String = row.get("winners")?;

    let entries = serde_json::from_str(&entries_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let winners = serde_json::from_str(&winners_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(RaffleRun {
        user_id: row.get("user_id")?,
        run_id: row.get("run_id")?,
        timestamp: row.get("timestamp")?,
        entries,
        winners,
        total_entries: row.get("total_entries")?,
        is_public: row.get("is_public")?,
    })
}

/// Rows of the internal log table: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
