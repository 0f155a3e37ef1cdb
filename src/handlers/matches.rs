use std::collections::HashMap;

use crate::auth::AuthenticatedAccount;
use crate::error::{ApiError, Result};
use crate::schemas::{AppState, CreateMatchRequest, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::Utc;
use common::{ApiResponse, MatchDto, Side};
use model::entities::{hero, match_record};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info, instrument, trace, warn};

fn side_to_db(side: Side) -> match_record::Side {
    match side {
        Side::Player => match_record::Side::Player,
        Side::Opponent => match_record::Side::Opponent,
    }
}

fn side_from_db(side: match_record::Side) -> Side {
    match side {
        match_record::Side::Player => Side::Player,
        match_record::Side::Opponent => Side::Opponent,
    }
}

/// Blank notes are stored as NULL.
fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Hero id to name, for resolving the two hero references of a match.
async fn hero_names<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<HashMap<i32, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(hero::Entity::find()
        .filter(hero::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|h| (h.id, h.name))
        .collect())
}

fn match_dto(model: match_record::Model, names: &HashMap<i32, String>) -> MatchDto {
    let name_of = |id: i32| names.get(&id).cloned().unwrap_or_default();
    MatchDto {
        id: model.id,
        hero_id: model.hero_id,
        hero_name: name_of(model.hero_id),
        opponent_hero_id: model.opponent_hero_id,
        opponent_hero_name: name_of(model.opponent_hero_id),
        who_started: side_from_db(model.who_started),
        winner: side_from_db(model.winner),
        sideboard: model.sideboard,
        comments: model.comments,
        created_at: model.created_at,
    }
}

/// Log a match for the authenticated account
#[utoipa::path(
    post,
    path = "/api/v1/matches",
    tag = "matches",
    security(("bearer_auth" = [])),
    request_body = CreateMatchRequest,
    responses(
        (status = 201, description = "Match created successfully", body = ApiResponse<MatchDto>),
        (status = 400, description = "Unknown hero or invalid notes", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_match(
    State(state): State<AppState>,
    current: AuthenticatedAccount,
    Valid(Json(request)): Valid<Json<CreateMatchRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<MatchDto>>)> {
    trace!("Entering create_match function");
    debug!(
        "Logging match: hero {} vs {}, winner {:?}",
        request.hero_id, request.opponent_hero_id, request.winner
    );

    let names = hero_names(&state.db, &[request.hero_id, request.opponent_hero_id]).await?;
    for hero_id in [request.hero_id, request.opponent_hero_id] {
        if !names.contains_key(&hero_id) {
            warn!("Rejected match with unknown hero id {}", hero_id);
            return Err(ApiError::InvalidHeroId(hero_id));
        }
    }

    let new_match = match_record::ActiveModel {
        hero_id: Set(request.hero_id),
        opponent_hero_id: Set(request.opponent_hero_id),
        who_started: Set(side_to_db(request.who_started)),
        winner: Set(side_to_db(request.winner)),
        sideboard: Set(non_blank(request.sideboard)),
        comments: Set(non_blank(request.comments)),
        created_at: Set(Utc::now()),
        account_id: Set(current.account_id()),
        ..Default::default()
    };
    let created = new_match.insert(&state.db).await?;

    info!("Match created successfully with ID: {}", created.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: match_dto(created, &names),
            message: "Match created successfully".to_string(),
            success: true,
        }),
    ))
}

/// The authenticated account's matches, newest first
#[utoipa::path(
    get,
    path = "/api/v1/matches",
    tag = "matches",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matches retrieved successfully", body = ApiResponse<Vec<MatchDto>>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_matches(
    State(state): State<AppState>,
    current: AuthenticatedAccount,
) -> Result<Json<ApiResponse<Vec<MatchDto>>>> {
    let matches = match_record::Entity::find()
        .filter(match_record::Column::AccountId.eq(current.account_id()))
        .order_by_desc(match_record::Column::CreatedAt)
        .order_by_desc(match_record::Column::Id)
        .all(&state.db)
        .await?;
    debug!("Retrieved {} matches for account {}", matches.len(), current.account_id());

    let mut hero_ids: Vec<i32> = matches
        .iter()
        .flat_map(|m| [m.hero_id, m.opponent_hero_id])
        .collect();
    hero_ids.sort_unstable();
    hero_ids.dedup();
    let names = hero_names(&state.db, &hero_ids).await?;
    let data = matches.into_iter().map(|m| match_dto(m, &names)).collect();

    Ok(Json(ApiResponse {
        data,
        message: "Matches retrieved successfully".to_string(),
        success: true,
    }))
}

/// One match of the authenticated account
#[utoipa::path(
    get,
    path = "/api/v1/matches/{match_id}",
    tag = "matches",
    security(("bearer_auth" = [])),
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match retrieved successfully", body = ApiResponse<MatchDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Match not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_match(
    State(state): State<AppState>,
    current: AuthenticatedAccount,
    Path(match_id): Path<i32>,
) -> Result<Json<ApiResponse<MatchDto>>> {
    // Other accounts' matches are indistinguishable from missing ones
    let found = match_record::Entity::find_by_id(match_id)
        .filter(match_record::Column::AccountId.eq(current.account_id()))
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Match"))?;

    let names = hero_names(&state.db, &[found.hero_id, found.opponent_hero_id]).await?;
    Ok(Json(ApiResponse {
        data: match_dto(found, &names),
        message: "Match retrieved successfully".to_string(),
        success: true,
    }))
}
