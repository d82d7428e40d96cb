/// Settings database: schema migrations and key/value queries.
mod migrations;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use rusqlite::Connection;

pub use settings::{query_setting, query_settings, upsert_setting};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    log::debug!("opened settings database at {db_path}");
    Ok(conn)
}

/// Opens a throwaway database with the full schema.
#[cfg(test)]
pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the app directory inside the user's data directory, if any.
pub fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("swatchr");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./swatchr.db` when no data dir is found.
pub fn default_db_path() -> String {
    match data_dir() {
        Some(dir) => dir.join("swatchr.db").to_string_lossy().into_owned(),
        None => "swatchr.db".to_string(),
    }
}

/// Log file used while the terminal UI owns stdout/stderr.
pub fn default_log_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("swatchr.log"))
        .unwrap_or_else(|| PathBuf::from("swatchr.log"))
}
