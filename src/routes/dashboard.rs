use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{
    attention_by_distance, filter_history, latest_readings, summarize_history, summarize_monitor,
    summarize_sleep,
};
use crate::models::{
    DriverDetailResponse, ErrorResponse, HealthResponse, HistoryQuery, HistoryResponse,
    LiveMetricsResponse, MonitorResponse, SleepProfileResponse,
};
use crate::routes::AppState;

/// Configure the monitor, history, metrics and sleep routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/monitor", web::get().to(monitor))
        .route("/drivers/{id}", web::get().to(driver_detail))
        .route("/history", web::get().to(history))
        .route("/metrics/live", web::get().to(live_metrics))
        .route("/sleep/profiles", web::get().to(sleep_profiles))
        .route("/sleep/profiles/{id}", web::get().to(sleep_profile));
}

fn not_found(what: &str, id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: format!("{} not found", what),
        message: format!("No {} with id {}", what.to_lowercase(), id),
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Real-time monitor: every driver plus header statistics
///
/// GET /api/v1/monitor
async fn monitor(state: web::Data<AppState>) -> impl Responder {
    let drivers = &state.fleet.drivers;
    let summary = summarize_monitor(drivers);

    tracing::debug!(
        "Monitor: {} drivers, {} on duty, {} critical",
        drivers.len(),
        summary.active_drivers,
        summary.critical_drivers
    );

    HttpResponse::Ok().json(MonitorResponse {
        drivers: drivers.clone(),
        summary,
    })
}

/// Driver detail: latest readings and attention along the route
///
/// GET /api/v1/drivers/{id}
async fn driver_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let driver_id = path.into_inner();

    let Some(driver) = state.fleet.driver(&driver_id) else {
        tracing::info!("Driver detail requested for unknown driver {}", driver_id);
        return not_found("Driver", &driver_id);
    };

    let timeline = driver
        .estimated_distance
        .map(|distance| attention_by_distance(&driver.alertness_data, distance))
        .unwrap_or_default();

    HttpResponse::Ok().json(DriverDetailResponse {
        driver: driver.clone(),
        latest_readings: latest_readings(&driver.alertness_data),
        attention_by_distance: timeline,
    })
}

/// Driver history with search, status and risk filters
///
/// GET /api/v1/history?search=mendoza&status=activo&riskLevel=bajo
async fn history(state: web::Data<AppState>, query: web::Query<HistoryQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let all = &state.fleet.history;
    let records: Vec<_> = filter_history(all, &query).into_iter().cloned().collect();

    tracing::debug!("History: showing {} of {} records", records.len(), all.len());

    HttpResponse::Ok().json(HistoryResponse {
        shown: records.len(),
        records,
        summary: summarize_history(all),
    })
}

/// Latest readings from the metrics source
///
/// GET /api/v1/metrics/live
///
/// Never fails: an unreachable source yields `available: false`.
async fn live_metrics(state: web::Data<AppState>) -> impl Responder {
    let response = match state.metrics.fetch().await {
        Ok(samples) => LiveMetricsResponse {
            available: true,
            samples,
            fetched_at: chrono::Utc::now(),
        },
        Err(e) => {
            tracing::warn!("Metrics fetch from {} source failed: {}", state.metrics.name(), e);
            LiveMetricsResponse {
                available: false,
                samples: Vec::new(),
                fetched_at: chrono::Utc::now(),
            }
        }
    };

    HttpResponse::Ok().json(response)
}

/// All sleep profiles with their summaries
///
/// GET /api/v1/sleep/profiles
async fn sleep_profiles(state: web::Data<AppState>) -> impl Responder {
    let profiles: Vec<SleepProfileResponse> = state
        .fleet
        .sleep_profiles
        .iter()
        .map(|profile| SleepProfileResponse {
            summary: summarize_sleep(profile),
            profile: profile.clone(),
        })
        .collect();

    HttpResponse::Ok().json(profiles)
}

/// GET /api/v1/sleep/profiles/{id}
async fn sleep_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let profile_id = path.into_inner();

    match state.fleet.sleep_profile(&profile_id) {
        Some(profile) => HttpResponse::Ok().json(SleepProfileResponse {
            summary: summarize_sleep(profile),
            profile: profile.clone(),
        }),
        None => not_found("Sleep profile", &profile_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_response() {
        let response = not_found("Driver", "d42");
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
