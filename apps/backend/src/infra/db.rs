use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::error::AppError;

/// Opens a connection pool for `url`. Does not run migrations.
///
/// In-memory SQLite gets a single pooled connection, since every connection
/// would otherwise see its own empty database.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url.to_owned());
    if is_sqlite_memory(url) {
        opt.min_connections(1).max_connections(1);
    } else {
        opt.max_connections(8);
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = if url.starts_with("postgres") {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        AppError::db_unavailable(format!("failed to connect to Postgres: {e}"))
                    })
                }
            },
            5,
            500,
        )
        .await?
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::db_unavailable(format!("failed to connect to database: {e}")))?
    };

    info!(engine = engine_name(url), "pool=create");
    Ok(conn)
}

/// Connects and brings the schema up to date.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    info!(engine = engine_name(url), "bootstrap=start");
    let conn = connect_db(url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!("bootstrap=ready");
    Ok(conn)
}

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

fn engine_name(url: &str) -> &'static str {
    if url.starts_with("postgres") {
        "postgres"
    } else if is_sqlite_memory(url) {
        "sqlite-memory"
    } else {
        "sqlite-file"
    }
}
