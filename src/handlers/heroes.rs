use crate::error::{ApiError, Result};
use crate::schemas::{AppState, ErrorResponse};
use axum::{extract::State, response::Json};
use common::{ApiResponse, HeroDto};
use model::entities::hero;
use tracing::{debug, instrument};

fn hero_dto(model: hero::Model) -> HeroDto {
    HeroDto {
        id: model.id,
        name: model.name,
        is_default: model.is_default,
    }
}

/// All heroes ordered by name
#[utoipa::path(
    get,
    path = "/api/v1/heroes",
    tag = "heroes",
    responses(
        (status = 200, description = "Heroes retrieved successfully", body = ApiResponse<Vec<HeroDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_heroes(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<HeroDto>>>> {
    let heroes = hero::Entity::all_by_name(&state.db).await?;
    debug!("Retrieved {} heroes from database", heroes.len());

    Ok(Json(ApiResponse {
        data: heroes.into_iter().map(hero_dto).collect(),
        message: "Heroes retrieved successfully".to_string(),
        success: true,
    }))
}

/// The hero pre-selected when logging a new match
#[utoipa::path(
    get,
    path = "/api/v1/heroes/default",
    tag = "heroes",
    responses(
        (status = 200, description = "Default hero retrieved successfully", body = ApiResponse<HeroDto>),
        (status = 404, description = "No hero is flagged as default", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_default_hero(State(state): State<AppState>) -> Result<Json<ApiResponse<HeroDto>>> {
    let default = hero::Entity::find_default(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Default hero"))?;

    Ok(Json(ApiResponse {
        data: hero_dto(default),
        message: "Default hero retrieved successfully".to_string(),
        success: true,
    }))
}
