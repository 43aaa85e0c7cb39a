use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, SuggestionsOverviewResponse, SuggestionsQuery, SuggestionsResponse};
use crate::routes::AppState;

/// Configure all suggestion routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/suggestions", web::get().to(find_suggestions))
        .route("/suggestions/overview", web::get().to(suggestions_overview));
}

/// Ranked drivers for one trip distance
///
/// GET /api/v1/suggestions?distanceKm=120&limit=5
async fn find_suggestions(
    state: web::Data<AppState>,
    query: web::Query<SuggestionsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for suggestions request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = query
        .limit
        .unwrap_or_else(|| state.ranker.default_limit())
        .min(state.max_limit);

    let result = state.ranker.rank(&state.fleet.drivers, query.distance_km, limit);

    tracing::info!(
        "Returning {} suggestions for {} km ({}) from {} eligible drivers",
        result.results.len(),
        query.distance_km,
        result.category.as_str(),
        result.eligible_candidates
    );

    HttpResponse::Ok().json(SuggestionsResponse::from(result))
}

/// Ranked drivers for short, medium and long trips
///
/// GET /api/v1/suggestions/overview
async fn suggestions_overview(state: web::Data<AppState>) -> impl Responder {
    let overview = state.ranker.suggestions_overview(&state.fleet.drivers);

    tracing::debug!(
        "Suggestions overview: {} short, {} medium, {} long",
        overview.short.results.len(),
        overview.medium.results.len(),
        overview.long.results.len()
    );

    HttpResponse::Ok().json(SuggestionsOverviewResponse::from(overview))
}
