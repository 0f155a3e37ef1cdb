use async_trait::async_trait;
use common::StatsSummary;
use sea_orm::DbErr;

use super::helpers::new_account;
use super::setup_db;
use crate::stats::testing::{TestScenario, TestScenarioBuilder};

/// A freshly created account that has not logged anything yet.
pub struct ScenarioEmpty {}

impl ScenarioEmpty {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl TestScenarioBuilder for ScenarioEmpty {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr> {
        let db = setup_db().await?;
        let account = new_account(&db).await?;

        Ok((db, account.id, StatsSummary::empty()))
    }
}
