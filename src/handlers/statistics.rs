use crate::auth::AuthenticatedAccount;
use crate::error::Result;
use crate::schemas::{AppState, ErrorResponse};
use axum::{extract::State, response::Json};
use common::{ApiResponse, StatsSummary};
use compute::compute_stats_snapshot;
use tracing::{debug, instrument, trace};

/// Win/loss statistics of the authenticated account
///
/// Computed from the stored matches on every request.
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "statistics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Statistics computed successfully", body = ApiResponse<StatsSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_stats(
    State(state): State<AppState>,
    current: AuthenticatedAccount,
) -> Result<Json<ApiResponse<StatsSummary>>> {
    trace!("Entering get_stats function");

    let summary = compute_stats_snapshot(&state.db, current.account_id()).await?;
    debug!(
        "Statistics for account {}: {} matches, {}% won",
        current.account_id(),
        summary.total_matches,
        summary.win_rate
    );

    Ok(Json(ApiResponse {
        data: summary,
        message: "Statistics computed successfully".to_string(),
        success: true,
    }))
}
