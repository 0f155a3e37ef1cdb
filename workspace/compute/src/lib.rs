//! Match statistics for the match log.
//!
//! [`compute_stats`] turns an account's stored matches into a
//! [`StatsSummary`](common::StatsSummary). It reads through the
//! [`StatsSource`] contract, so the same aggregation runs against SQL
//! storage and against an in-memory [`MatchLedger`].

pub mod error;
pub mod source;
pub mod stats;

pub use error::{ComputeError, Result};
pub use source::{HeroKey, HeroTally, MatchFilter, MatchLedger, StatsSource};
pub use stats::{compute_stats, compute_stats_snapshot, win_rate};
