use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Games and wins for one hero, either as the player's pick or as the
/// opponent's.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct HeroBreakdown {
    /// Hero display name
    pub name: String,
    /// Matches recorded with this hero on the given side
    pub total: u64,
    /// Matches among those that the account owner won
    pub wins: u64,
}

impl HeroBreakdown {
    pub fn new(name: impl Into<String>, total: u64, wins: u64) -> Self {
        Self {
            name: name.into(),
            total,
            wins,
        }
    }
}

/// Win/loss summary of one account's match history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_matches: u64,
    pub wins: u64,
    pub losses: u64,
    /// Percentage of matches won, rounded to two decimals. `0` without matches.
    pub win_rate: f64,
    /// Rows keyed by the hero the account owner played, sorted by name.
    pub hero_breakdown: Vec<HeroBreakdown>,
    /// Rows keyed by the hero the opponent played, sorted by name.
    pub opponent_breakdown: Vec<HeroBreakdown>,
}

impl StatsSummary {
    /// Summary of an account that has not logged any match yet.
    pub fn empty() -> Self {
        Self {
            total_matches: 0,
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            hero_breakdown: Vec::new(),
            opponent_breakdown: Vec::new(),
        }
    }
}
