use crate::auth::AuthenticatedAccount;
use crate::error::{ApiError, Result};
use crate::schemas::{AppState, CredentialsRequest, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{AccountDto, ApiResponse, TokenDto};
use model::entities::account;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, SqlErr};
use tracing::{debug, info, instrument, trace, warn};

pub(crate) fn account_dto(model: account::Model) -> AccountDto {
    AccountDto {
        id: model.id,
        username: model.username,
    }
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Account created successfully", body = ApiResponse<AccountDto>),
        (status = 400, description = "Invalid username or password length"),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(username = %request.username))]
pub async fn signup(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CredentialsRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<AccountDto>>)> {
    trace!("Entering signup function");

    if account::Model::find_by_username(&state.db, &request.username)
        .await?
        .is_some()
    {
        return Err(ApiError::UsernameTaken(request.username));
    }

    let password_hash = state.auth.hash_password(&request.password)?;
    let new_account = account::ActiveModel {
        username: Set(request.username.clone()),
        password_hash: Set(password_hash),
        ..Default::default()
    };

    let created = match new_account.insert(&state.db).await {
        Ok(created) => created,
        // Lost a race against a concurrent signup
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(ApiError::UsernameTaken(request.username));
        }
        Err(e) => return Err(e.into()),
    };

    info!("Account created successfully with ID: {}", created.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: account_dto(created),
            message: "Account created successfully".to_string(),
            success: true,
        }),
    ))
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Logged in successfully", body = ApiResponse<TokenDto>),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(username = %request.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<ApiResponse<TokenDto>>> {
    trace!("Entering login function");

    let Some(found) = account::Model::find_by_username(&state.db, &request.username).await? else {
        warn!("Login attempt for unknown username");
        return Err(ApiError::InvalidCredentials);
    };

    if !state.auth.verify_password(&request.password, &found.password_hash)? {
        warn!("Login attempt with wrong password for account {}", found.id);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.auth.create_access_token(found.id)?;
    debug!("Issued access token for account {}", found.id);

    Ok(Json(ApiResponse {
        data: TokenDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: state.auth.token_ttl_seconds(),
        },
        message: "Logged in successfully".to_string(),
        success: true,
    }))
}

/// The account the access token belongs to
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account retrieved successfully", body = ApiResponse<AccountDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    current: AuthenticatedAccount,
) -> Result<Json<ApiResponse<AccountDto>>> {
    let found = account::Entity::find_by_id(current.account_id())
        .one(&state.db)
        .await?
        .ok_or(ApiError::AccountNotFound(current.account_id()))?;

    Ok(Json(ApiResponse {
        data: account_dto(found),
        message: "Account retrieved successfully".to_string(),
        success: true,
    }))
}
