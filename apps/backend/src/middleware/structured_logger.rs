use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Emits one `request_completed` event per request, levelled by status class.
///
/// Game routes also carry `game_id`, taken from the matched path once routing
/// has run.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let (status, game_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_info().get("game_id").map(str::to_owned),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();
            let game_id = game_id.unwrap_or_default();

            match status {
                s if s.is_server_error() => error!(
                    http.method = %method, url.path = %path, http.status_code = status_code,
                    duration_us, trace_id = %trace_id, game_id = %game_id, "request_completed"
                ),
                s if s.is_client_error() => warn!(
                    http.method = %method, url.path = %path, http.status_code = status_code,
                    duration_us, trace_id = %trace_id, game_id = %game_id, "request_completed"
                ),
                _ => info!(
                    http.method = %method, url.path = %path, http.status_code = status_code,
                    duration_us, trace_id = %trace_id, game_id = %game_id, "request_completed"
                ),
            }

            result
        })
    }
}
