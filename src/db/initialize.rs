use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// All schema creation and upgrades go through the migration engine.
/// Returns the migration versions applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    Ok(run_pending_migrations(conn)?)
}
