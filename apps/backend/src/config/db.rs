use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database engine to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(DbKind::Postgres),
            "sqlite-file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "HANABI_DB_KIND must be postgres, sqlite-file or sqlite-memory, got '{other}'"
            ))),
        }
    }
}

impl DbKind {
    pub fn from_env() -> Result<Self, AppError> {
        env::var("HANABI_DB_KIND")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()
    }
}

/// Database URL for the process: `HANABI_DATABASE_URL` when set, otherwise
/// assembled for the kind named by `HANABI_DB_KIND`.
pub fn database_url_from_env() -> Result<String, AppError> {
    if let Ok(url) = env::var("HANABI_DATABASE_URL") {
        return Ok(url);
    }
    db_url(DbKind::from_env()?)
}

/// Builds a database URL from environment variables for `kind`.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("HANABI_DB")?;
            let username = must_var("HANABI_DB_USER")?;
            let password = must_var("HANABI_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = env::var("HANABI_SQLITE_PATH").unwrap_or_else(|_| "hanabi.db".to_string());
            Ok(sqlite_file_url(&path))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// URL for a SQLite file, created on first connect.
pub fn sqlite_file_url(path: &str) -> String {
    format!("sqlite://{path}?mode=rwc")
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
