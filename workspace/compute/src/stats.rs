//! Win/loss statistics of one account, overall and broken down by hero.
//!
//! The summary is always computed from the stored rows; nothing is cached or
//! maintained incrementally, so two calls without writes in between return
//! identical summaries.

use common::{HeroBreakdown, StatsSummary};
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseConnection, DbBackend, IsolationLevel, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};
use crate::source::{HeroKey, HeroTally, MatchFilter, StatsSource};

#[cfg(test)]
pub(crate) mod testing;

/// Computes the summary of `account_id`'s match history.
///
/// Fails with [`ComputeError::UnknownAccount`] when the account does not
/// exist, and with [`ComputeError::StorageUnavailable`] when the source does
/// not answer. Storage errors are never retried.
#[instrument(skip(source))]
pub async fn compute_stats(source: &dyn StatsSource, account_id: i32) -> Result<StatsSummary> {
    if !source.account_exists(account_id).await? {
        warn!(account_id, "Statistics requested for unknown account");
        return Err(ComputeError::UnknownAccount(account_id));
    }

    let filter = MatchFilter::account(account_id);
    let total_matches = source.count(&filter).await?;
    let wins = source.count(&filter.won()).await?;
    // Two outcomes only: everything that is not a win is a loss
    let losses = total_matches.saturating_sub(wins);

    let hero_breakdown = into_breakdown(source.group_by_hero(&filter, HeroKey::Player).await?);
    let opponent_breakdown =
        into_breakdown(source.group_by_hero(&filter, HeroKey::Opponent).await?);

    let summary = StatsSummary {
        total_matches,
        wins,
        losses,
        win_rate: win_rate(wins, total_matches),
        hero_breakdown,
        opponent_breakdown,
    };

    debug!(
        account_id,
        total_matches, wins, losses, win_rate = summary.win_rate,
        "Computed statistics"
    );
    Ok(summary)
}

/// [`compute_stats`] with every query issued inside one read-only
/// transaction, so the totals and both breakdowns describe the same set of
/// rows.
#[instrument(skip(db))]
pub async fn compute_stats_snapshot(
    db: &DatabaseConnection,
    account_id: i32,
) -> Result<StatsSummary> {
    let (isolation_level, access_mode) = snapshot_config(db.get_database_backend());
    let txn = db.begin_with_config(isolation_level, access_mode).await?;
    let summary = compute_stats(&txn, account_id).await;
    // Read-only, nothing to keep
    txn.rollback().await?;

    if let Ok(summary) = &summary {
        info!(account_id, total_matches = summary.total_matches, "Statistics snapshot ready");
    }
    summary
}

/// Transaction settings for a snapshot read.
///
/// READ COMMITTED (the Postgres default) takes a new snapshot per statement,
/// so the snapshot asks for REPEATABLE READ. SQLite transactions are
/// serializable already and sea-orm cannot configure them.
fn snapshot_config(backend: DbBackend) -> (Option<IsolationLevel>, Option<AccessMode>) {
    match backend {
        DbBackend::Sqlite => (None, None),
        DbBackend::Postgres | DbBackend::MySql => {
            (Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
        }
    }
}

/// Percentage of won matches rounded to two decimals. Zero matches give a
/// rate of `0`.
///
/// The rate is computed in `f64` and the binary value is rounded, ties to
/// even, so `23/160` (stored just below `14.375`) gives `14.37`.
pub fn win_rate(wins: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let rate = wins as f64 / total as f64 * 100.0;
    format!("{rate:.2}").parse().unwrap_or(0.0)
}

fn into_breakdown(rows: Vec<HeroTally>) -> Vec<HeroBreakdown> {
    rows.into_iter()
        .map(|row| HeroBreakdown::new(row.name, row.total, row.wins))
        .collect()
}
