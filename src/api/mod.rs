//! API handlers for GearGuard REST endpoints

pub mod dashboard;
pub mod equipment;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod teams;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origin);

    let api = Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route("/equipment", get(equipment::list_equipment))
        .route("/equipment/:id", get(equipment::get_equipment))
        .route("/equipment/:id/requests", get(equipment::list_equipment_requests))
        .route("/equipment/:id/open-count", get(equipment::open_request_count))
        // Teams
        .route("/teams", get(teams::list_teams))
        .route("/teams/:id/members", get(teams::list_team_members))
        // Requests
        .route("/requests", get(requests::list_requests).post(requests::create_request))
        .route("/requests/calendar", get(requests::calendar))
        .route("/requests/:id/status", put(requests::update_status))
        .route("/requests/:id/complete", post(requests::complete_request))
        .route("/requests/:id/technician", put(requests::assign_technician))
        // Dashboard
        .route("/dashboard/stats", get(dashboard::get_stats))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// `*` allows any origin, otherwise a comma separated list of origins
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origin.trim() == "*" {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origin
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
