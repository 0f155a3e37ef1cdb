use async_trait::async_trait;
use common::{HeroBreakdown, StatsSummary};
use sea_orm::DbErr;

use super::helpers::{hero_id, new_account, new_match};
use super::setup_db;
use crate::stats::testing::{TestScenario, TestScenarioBuilder};
use model::entities::match_record::Side;

/// Two accounts sharing heroes. Only the second account's matches may show
/// up in its summary, including a mirror match where both sides play the
/// same hero.
pub struct ScenarioIsolation {}

impl ScenarioIsolation {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl TestScenarioBuilder for ScenarioIsolation {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr> {
        let db = setup_db().await?;
        let other = new_account(&db).await?;
        let account = new_account(&db).await?;

        let oscilio = hero_id(&db, "Oscilio").await?;
        let fai = hero_id(&db, "Fai").await?;
        let verdance = hero_id(&db, "Verdance").await?;

        // Noise from the other account
        for _ in 0..4 {
            new_match(&db, &other, oscilio, fai, Side::Player).await?;
        }
        new_match(&db, &other, verdance, verdance, Side::Opponent).await?;

        new_match(&db, &account, oscilio, oscilio, Side::Player).await?;
        new_match(&db, &account, oscilio, fai, Side::Opponent).await?;
        new_match(&db, &account, fai, verdance, Side::Opponent).await?;
        new_match(&db, &account, fai, oscilio, Side::Player).await?;
        new_match(&db, &account, verdance, fai, Side::Opponent).await?;
        new_match(&db, &account, verdance, fai, Side::Opponent).await?;

        let expected = StatsSummary {
            total_matches: 6,
            wins: 2,
            losses: 4,
            win_rate: 33.33,
            hero_breakdown: vec![
                HeroBreakdown::new("Fai", 2, 1),
                HeroBreakdown::new("Oscilio", 2, 1),
                HeroBreakdown::new("Verdance", 2, 0),
            ],
            opponent_breakdown: vec![
                HeroBreakdown::new("Fai", 3, 0),
                HeroBreakdown::new("Oscilio", 2, 2),
                HeroBreakdown::new("Verdance", 1, 0),
            ],
        };

        Ok((db, account.id, expected))
    }
}
