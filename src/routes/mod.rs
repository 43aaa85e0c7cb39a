// Route exports
pub mod dashboard;
pub mod suggestions;

use actix_web::{error, web, HttpRequest};
use crate::core::Ranker;
use crate::models::ErrorResponse;
use crate::services::{Fleet, MetricsSource};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub fleet: Arc<Fleet>,
    pub metrics: Arc<dyn MetricsSource>,
    pub ranker: Ranker,
    /// Upper bound applied to any requested suggestion limit
    pub max_limit: usize,
}

/// Malformed query strings get the same JSON body as validation failures
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .configure(dashboard::configure)
            .configure(suggestions::configure),
    );
}
