use actix_web::{web, App, HttpServer};
use hanabi::ai::OracleConfig;
use hanabi::config::db::database_url_from_env;
use hanabi::infra::state::build_state;
use hanabi::middleware::request_trace::RequestTrace;
use hanabi::middleware::structured_logger::StructuredLogger;
use hanabi::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let database_url = match database_url_from_env() {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Invalid database configuration");
            std::process::exit(1);
        }
    };
    let oracle_config = match OracleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid oracle configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(database_url)
        .with_oracle_config(oracle_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, oracle = app_state.oracle.name(), "Starting Hanabi backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
