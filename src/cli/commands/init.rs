use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;

use crate::cli::parser::Cli;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    // 1️⃣ configuration
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rafflepick…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    // 2️⃣ database (tables + migrations)
    let conn = Connection::open(&db_path)?;
    for version in init_db(&conn)? {
        success(format!("Migration applied: {version}"));
    }

    // 3️⃣ internal log (non-blocking)
    ttlog_quiet(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
