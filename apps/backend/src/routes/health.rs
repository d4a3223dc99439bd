use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    oracle: &'static str,
    time: String,
}

struct DbProbe {
    error: Option<String>,
    migrations: String,
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    if let Err(e) = db.query_one(ping).await {
        return DbProbe {
            error: Some(format!("DB query failed: {e}")),
            migrations: "unknown".to_string(),
        };
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbProbe {
        error: None,
        migrations,
    }
}

/// GET /health
///
/// Always 200 so the process stays observable while the database is down.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let probe = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe {
            error: Some(format!("DB unavailable: {e}")),
            migrations: "unknown".to_string(),
        },
    };

    let healthy = probe.error.is_none();
    HttpResponse::Ok().json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        app_version: env!("CARGO_PKG_VERSION"),
        db: if healthy { "ok" } else { "error" },
        db_error: probe.error,
        migrations: probe.migrations,
        oracle: app_state.oracle.name(),
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
