use std::sync::Arc;

use common::{AccountDto, ApiResponse, HeroBreakdown, HeroDto, MatchDto, Side, StatsSummary, TokenDto};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi, ToSchema,
};
use validator::Validate;

use crate::auth::AuthService;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Password hashing and token signing
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: AuthService) -> Self {
        Self {
            db,
            auth: Arc::new(auth),
        }
    }
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Credentials for signup and login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CredentialsRequest {
    #[validate(length(min = 3, max = 80))]
    pub username: String,
    #[validate(length(min = 4))]
    pub password: String,
}

/// A match to log for the authenticated account
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    /// The hero the account owner played
    pub hero_id: i32,
    /// The hero the opponent played
    pub opponent_hero_id: i32,
    pub who_started: Side,
    pub winner: Side,
    #[validate(length(max = 2000))]
    pub sideboard: Option<String>,
    #[validate(length(max = 2000))]
    pub comments: Option<String>,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::signup,
        crate::handlers::auth::login,
        crate::handlers::auth::me,
        crate::handlers::heroes::list_heroes,
        crate::handlers::heroes::get_default_hero,
        crate::handlers::matches::create_match,
        crate::handlers::matches::list_matches,
        crate::handlers::matches::get_match,
        crate::handlers::statistics::get_stats,
    ),
    components(
        schemas(
            ApiResponse<StatsSummary>,
            ApiResponse<AccountDto>,
            ApiResponse<TokenDto>,
            ApiResponse<HeroDto>,
            ApiResponse<Vec<HeroDto>>,
            ApiResponse<MatchDto>,
            ApiResponse<Vec<MatchDto>>,
            ErrorResponse,
            HealthResponse,
            CredentialsRequest,
            CreateMatchRequest,
            AccountDto,
            TokenDto,
            HeroDto,
            MatchDto,
            Side,
            StatsSummary,
            HeroBreakdown,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Signup, login and the current account"),
        (name = "heroes", description = "Hero reference data"),
        (name = "matches", description = "Logging and browsing matches"),
        (name = "statistics", description = "Win/loss statistics"),
    ),
    info(
        title = "Matchlog API",
        description = "Match tracker for a hero-based card game - log games and see win rates per hero",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
