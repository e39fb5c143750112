use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::error::{AppError, AppResult};
use crate::msg_debug;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured in `DB_FILE_MAIN` (or the default one).
    pub fn new(config: &Config) -> AppResult<Db> {
        let db_file_path = config.database_path()?;
        Self::open(&db_file_path)
    }

    /// Opens a database file, creating parent directories and applying migrations.
    pub fn open(path: &Path) -> AppResult<Db> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        msg_debug!(format!("Opening database at {}", path.display()));
        let conn = Connection::open(path).map_err(AppError::StoreRead)?;
        Self::prepare(conn)
    }

    pub fn open_in_memory() -> AppResult<Db> {
        let conn = Connection::open_in_memory().map_err(AppError::StoreRead)?;
        Self::prepare(conn)
    }

    fn prepare(mut conn: Connection) -> AppResult<Db> {
        conn.pragma_update(None, "foreign_keys", "ON").map_err(AppError::StoreWrite)?;
        init_with_migrations(&mut conn).map_err(AppError::StoreWrite)?;
        Ok(Db { conn })
    }
}
