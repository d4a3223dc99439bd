//! Throwaway SQLite databases for integration tests.

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tempfile::TempDir;

/// A migrated SQLite file living in its own temporary directory.
///
/// The directory (and the database) is removed when this value is dropped,
/// so keep it alive for as long as the connection is used.
pub struct TestDb {
    pub conn: DatabaseConnection,
    pub url: String,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self, DbErr> {
        let dir = tempfile::tempdir().map_err(|e| DbErr::Custom(e.to_string()))?;
        let path = dir.path().join("hanabi-test.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let mut opt = ConnectOptions::new(url.clone());
        opt.max_connections(4).sqlx_logging(false);
        let conn = Database::connect(opt).await?;
        migrate(&conn, MigrationCommand::Up).await?;

        Ok(Self {
            conn,
            url,
            _dir: dir,
        })
    }
}
