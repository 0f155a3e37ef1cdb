pub mod helpers;
pub mod scenario_empty;
pub mod scenario_isolation;
pub mod scenario_reference;

pub use scenario_empty::ScenarioEmpty;
pub use scenario_isolation::ScenarioIsolation;
pub use scenario_reference::ScenarioReference;

use async_trait::async_trait;
use common::StatsSummary;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait};

use crate::error::Result as ComputeResult;
use crate::source::MatchLedger;
use crate::stats::{compute_stats, compute_stats_snapshot};
use migration::{Migrator, MigratorTrait};
use model::entities::prelude::*;

async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    // Connect to the SQLite database
    let db = Database::connect("sqlite::memory:").await?;

    // Enable foreign keys
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

    // Try to apply migrations first
    Migrator::up(&db, None).await.expect("Migrations failed.");
    Ok(db)
}

/// Prepared test scenario: the database, the account to summarise and the
/// summary it must produce.
pub type TestScenario = (DatabaseConnection, i32, StatsSummary);

/// Trait for building test scenarios.
#[async_trait]
pub trait TestScenarioBuilder {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr>;
}

/// Loads every row into an in-memory ledger.
pub async fn load_ledger(db: &DatabaseConnection) -> Result<MatchLedger, DbErr> {
    Ok(MatchLedger::from_models(
        Account::find().all(db).await?,
        Hero::find().all(db).await?,
        MatchRecord::find().all(db).await?,
    ))
}

/// Runs the scenario through the SQL source, the transactional snapshot and
/// the in-memory ledger, and checks all three against the expected summary.
pub async fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) -> ComputeResult<()> {
    let (db, account_id, expected) = builder.get_scenario().await?;

    let from_sql = compute_stats(&db, account_id).await?;
    assert_eq!(from_sql, expected, "SQL source disagrees with expected summary");

    let from_snapshot = compute_stats_snapshot(&db, account_id).await?;
    assert_eq!(from_snapshot, expected, "snapshot disagrees with expected summary");

    let ledger = load_ledger(&db).await?;
    let from_ledger = compute_stats(&ledger, account_id).await?;
    assert_eq!(from_ledger, expected, "in-memory ledger disagrees with expected summary");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;
    use tracing::Level;

    #[tokio::test]
    async fn test_scenario_reference() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_test_writer()
                .finish(),
        );

        run_and_assert_scenario(&ScenarioReference::new())
            .await
            .expect("Failed to run reference scenario");
    }

    #[tokio::test]
    async fn test_scenario_empty() {
        run_and_assert_scenario(&ScenarioEmpty::new())
            .await
            .expect("Failed to run empty scenario");
    }

    #[tokio::test]
    async fn test_scenario_isolation() {
        run_and_assert_scenario(&ScenarioIsolation::new())
            .await
            .expect("Failed to run isolation scenario");
    }

    #[tokio::test]
    async fn test_unknown_account_in_database() {
        let db = setup_db().await.unwrap();

        let result = compute_stats(&db, 4242).await;
        assert!(matches!(result, Err(ComputeError::UnknownAccount(4242))));

        let result = compute_stats_snapshot(&db, 4242).await;
        assert!(matches!(result, Err(ComputeError::UnknownAccount(4242))));
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let (db, account_id, _) = ScenarioReference::new().get_scenario().await.unwrap();

        db.execute_unprepared("PRAGMA foreign_keys = OFF;").await.unwrap();
        db.execute_unprepared("DROP TABLE matches;").await.unwrap();

        let result = compute_stats(&db, account_id).await;
        assert!(matches!(result, Err(ComputeError::StorageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_byte_identical() {
        let (db, account_id, _) = ScenarioIsolation::new().get_scenario().await.unwrap();

        let first = compute_stats(&db, account_id).await.unwrap();
        let second = compute_stats(&db, account_id).await.unwrap();
        assert_eq!(serde_json::to_vec(&first).unwrap(), serde_json::to_vec(&second).unwrap());
    }
}
