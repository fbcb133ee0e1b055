use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `runs` table (first schema, without `is_public`).
fn create_runs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS runs (
            run_id         TEXT PRIMARY KEY,
            user_id        TEXT NOT NULL,
            timestamp      TEXT NOT NULL,
            entries        TEXT NOT NULL,
            winners        TEXT NOT NULL,
            total_entries  INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_runs_user_time ON runs(user_id, timestamp);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_add_is_public_to_runs(conn: &Connection) -> Result<Option<&'static str>> {
    let version = "20250301_0001_add_is_public_to_runs";

    if migration_applied(conn, version)? {
        return Ok(None);
    }

    // A database created by hand may already carry the column.
    if !column_exists(conn, "runs", "is_public")? {
        conn.execute("ALTER TABLE runs ADD COLUMN is_public INTEGER", [])?;
    }

    mark_applied(conn, version, "Added is_public flag to runs")?;

    Ok(Some(version))
}

/// Public entry point: run all pending migrations. Safe to call on every
/// start.
///
/// Prints nothing; returns the versions applied by this call so the caller
/// decides whether to announce them.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "runs")? {
        create_runs_table(conn)?;
    }

    let mut applied = Vec::new();
    applied.extend(migrate_add_is_public_to_runs(conn)?);

    Ok(applied)
}
