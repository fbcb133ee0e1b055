pub mod config;
pub mod draw;
pub mod env;
pub mod export;
pub mod init;
pub mod log;
pub mod runs;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, applying pending migrations first.
/// Migrations run silently here so `--json` output stays parseable.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
