use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::store::session::DbTarget;

pub const DEFAULT_DB_PATH: &str = "./.instance/contacts.db";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const MEMORY_DB: &str = ":memory:";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db: DbTarget,
    pub log_filter: String,
}

impl Config {
    /// Reads `.env` (if any) and the process environment.
    /// `db_override` comes from the command line and wins over `AGENDA_DB_PATH`.
    pub fn load(db_override: Option<&str>) -> Result<Self, AppError> {
        dotenv().ok();

        let db = match db_override {
            Some(db) => db.to_string(),
            None => env::var("AGENDA_DB_PATH").unwrap_or(DEFAULT_DB_PATH.to_string()),
        };
        let log_filter = env::var("AGENDA_LOG").unwrap_or(DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db: parse_db_target(&db)?,
            log_filter,
        })
    }
}

pub fn parse_db_target(value: &str) -> Result<DbTarget, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::Config("database path must not be empty".to_string()));
    }
    if value == MEMORY_DB {
        return Ok(DbTarget::Memory);
    }

    let path = PathBuf::from(value);
    if path.is_dir() {
        return Err(AppError::Config(format!(
            "database path {} is a directory",
            path.display()
        )));
    }
    Ok(DbTarget::File(path))
}
