use crate::handlers::{
    auth::{login, me, signup},
    health::health_check,
    heroes::{get_default_hero, list_heroes},
    matches::{create_match, get_match, list_matches},
    statistics::get_stats,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use std::sync::OnceLock;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Accounts and sessions
        .route("/api/v1/auth/signup", post(signup))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/me", get(me))
        // Hero reference data
        .route("/api/v1/heroes", get(list_heroes))
        .route("/api/v1/heroes/default", get(get_default_hero))
        // Matches
        .route("/api/v1/matches", post(create_match).get(list_matches))
        .route("/api/v1/matches/:match_id", get(get_match))
        // Statistics
        .route("/api/v1/stats", get(get_stats))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Prometheus handle of the process-global metrics recorder.
static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Adds the Prometheus `/metrics` endpoint and the layer recording HTTP metrics.
///
/// The recorder is installed on the first call; later calls share it.
pub fn with_metrics(router: Router) -> Router {
    let metric_handle = METRICS_HANDLE
        .get_or_init(|| PrometheusMetricLayer::pair().1)
        .clone();
    router
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(PrometheusMetricLayer::new())
}
