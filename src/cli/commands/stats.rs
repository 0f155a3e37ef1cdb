use anyhow::{anyhow, Context, Result};
use common::StatsSummary;
use compute::compute_stats_snapshot;
use model::entities::account;
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, trace};

/// Prints the statistics of `username` to stdout as JSON.
pub async fn print_stats(database_url: &str, username: &str) -> Result<()> {
    trace!("Entering print_stats function");
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))?;

    let summary = stats_for_username(&db, username).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

pub async fn stats_for_username(db: &DatabaseConnection, username: &str) -> Result<StatsSummary> {
    let found = account::Model::find_by_username(db, username)
        .await?
        .ok_or_else(|| anyhow!("No account named '{}'", username))?;

    compute_stats_snapshot(db, found.id)
        .await
        .with_context(|| format!("Failed to compute statistics for '{}'", username))
}
