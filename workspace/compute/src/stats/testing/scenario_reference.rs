use async_trait::async_trait;
use common::{HeroBreakdown, StatsSummary};
use sea_orm::DbErr;

use super::helpers::{hero_id, new_account, new_match};
use super::setup_db;
use crate::stats::testing::{TestScenario, TestScenarioBuilder};
use model::entities::match_record::Side;

/// Three matches over two played heroes and two opponent heroes:
/// (Boltyn vs Dorinthea, won), (Boltyn vs Rhinar, lost), (Katsu vs Dorinthea, won).
pub struct ScenarioReference {}

impl ScenarioReference {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl TestScenarioBuilder for ScenarioReference {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr> {
        let db = setup_db().await?;
        let account = new_account(&db).await?;

        let boltyn = hero_id(&db, "Boltyn").await?;
        let katsu = hero_id(&db, "Katsu").await?;
        let dorinthea = hero_id(&db, "Dorinthea").await?;
        let rhinar = hero_id(&db, "Rhinar").await?;

        new_match(&db, &account, boltyn, dorinthea, Side::Player).await?;
        new_match(&db, &account, boltyn, rhinar, Side::Opponent).await?;
        new_match(&db, &account, katsu, dorinthea, Side::Player).await?;

        let expected = StatsSummary {
            total_matches: 3,
            wins: 2,
            losses: 1,
            win_rate: 66.67,
            hero_breakdown: vec![
                HeroBreakdown::new("Boltyn", 2, 1),
                HeroBreakdown::new("Katsu", 1, 1),
            ],
            opponent_breakdown: vec![
                HeroBreakdown::new("Dorinthea", 2, 2),
                HeroBreakdown::new("Rhinar", 1, 0),
            ],
        };

        Ok((db, account.id, expected))
    }
}
