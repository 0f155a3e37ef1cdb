//! The persistence contract the statistics aggregator reads through.
//!
//! The aggregator needs two primitives: counting an account's matches (all of
//! them, or only the won ones) and grouping them by hero with a count and a
//! conditional "won" sum. [`StatsSource`] is implemented for SeaORM
//! connections, which push the grouping into SQL, and for [`MatchLedger`],
//! which scans an in-memory snapshot.

mod database;
mod memory;

pub use memory::MatchLedger;

use async_trait::async_trait;
use model::entities::match_record::{self, Side};

use crate::error::Result;

/// Equality filter over match records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFilter {
    pub account_id: i32,
    pub winner: Option<Side>,
}

impl MatchFilter {
    /// Every match owned by the account.
    pub fn account(account_id: i32) -> Self {
        Self {
            account_id,
            winner: None,
        }
    }

    /// Narrows the filter to matches the account owner won.
    pub fn won(self) -> Self {
        Self {
            winner: Some(Side::Player),
            ..self
        }
    }

    /// Whether a record passes this filter.
    pub fn matches(&self, record: &match_record::Model) -> bool {
        record.account_id == self.account_id
            && self.winner.is_none_or(|winner| record.winner == winner)
    }
}

/// Which hero reference a breakdown groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroKey {
    /// `hero_id`, the hero the account owner played.
    Player,
    /// `opponent_hero_id`.
    Opponent,
}

impl HeroKey {
    /// The hero id a record carries for this key.
    pub fn hero_of(&self, record: &match_record::Model) -> i32 {
        match self {
            HeroKey::Player => record.hero_id,
            HeroKey::Opponent => record.opponent_hero_id,
        }
    }
}

/// One grouped row: matches and wins for one hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroTally {
    pub hero_id: i32,
    pub name: String,
    pub total: u64,
    /// Matches in the group whose winner is the account owner.
    pub wins: u64,
}

/// Read access to stored match data.
///
/// Implementations must return grouped rows ordered by hero name, then by
/// hero id, and must omit heroes without any matching record.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Whether the account exists at all.
    async fn account_exists(&self, account_id: i32) -> Result<bool>;

    /// Number of records passing `filter`.
    async fn count(&self, filter: &MatchFilter) -> Result<u64>;

    /// Records passing `filter`, grouped by the hero selected by `key`.
    async fn group_by_hero(&self, filter: &MatchFilter, key: HeroKey) -> Result<Vec<HeroTally>>;
}
