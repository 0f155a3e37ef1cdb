//! Common transport-layer types shared between the server and its clients.
//! These structs mirror the handlers' response payloads so a client can
//! deserialize API responses without duplicating shapes.

mod statistics;

pub use statistics::{HeroBreakdown, StatsSummary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Accounts =====================

/// Public view of an account. The password digest never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AccountDto {
    pub id: i32,
    pub username: String,
}

/// Bearer token issued on login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TokenDto {
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

// ===================== Heroes =====================

/// Hero reference data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HeroDto {
    pub id: i32,
    pub name: String,
    /// Pre-selected as the player's hero when logging a match
    pub is_default: bool,
}

// ===================== Matches =====================

/// Side of a match: the account owner or the opponent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

/// A logged match with hero names resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MatchDto {
    pub id: i32,
    pub hero_id: i32,
    pub hero_name: String,
    pub opponent_hero_id: i32,
    pub opponent_hero_name: String,
    pub who_started: Side,
    pub winner: Side,
    pub sideboard: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
