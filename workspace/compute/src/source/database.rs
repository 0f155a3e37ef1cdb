use async_trait::async_trait;
use model::entities::{account, hero, match_record, match_record::Side};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use tracing::{debug, instrument, trace};

use super::{HeroKey, HeroTally, MatchFilter, StatsSource};
use crate::error::Result;

/// Raw shape of one grouped row.
#[derive(Debug, FromQueryResult)]
struct TallyRow {
    hero_id: i32,
    name: String,
    total: i64,
    wins: Option<i64>,
}

impl From<TallyRow> for HeroTally {
    fn from(row: TallyRow) -> Self {
        Self {
            hero_id: row.hero_id,
            name: row.name,
            total: row.total.max(0) as u64,
            wins: row.wins.unwrap_or(0).max(0) as u64,
        }
    }
}

fn condition(filter: &MatchFilter) -> Condition {
    let mut condition =
        Condition::all().add(match_record::Column::AccountId.eq(filter.account_id));
    if let Some(winner) = filter.winner {
        condition = condition.add(match_record::Column::Winner.eq(winner));
    }
    condition
}

async fn account_exists<C: ConnectionTrait>(db: &C, account_id: i32) -> Result<bool> {
    let found = account::Entity::find_by_id(account_id).count(db).await?;
    Ok(found > 0)
}

async fn count<C: ConnectionTrait>(db: &C, filter: &MatchFilter) -> Result<u64> {
    let total = match_record::Entity::find()
        .filter(condition(filter))
        .count(db)
        .await?;
    trace!(?filter, total, "Counted matches");
    Ok(total)
}

/// `SELECT heroes.id, heroes.name, COUNT(matches.id),
///  SUM(CASE WHEN matches.winner = 'player' THEN 1 ELSE 0 END)
///  ... GROUP BY heroes.id, heroes.name ORDER BY heroes.name, heroes.id`
async fn group_by_hero<C: ConnectionTrait>(
    db: &C,
    filter: &MatchFilter,
    key: HeroKey,
) -> Result<Vec<HeroTally>> {
    let relation = match key {
        HeroKey::Player => match_record::Relation::Hero,
        HeroKey::Opponent => match_record::Relation::OpponentHero,
    };
    let won = Expr::case(match_record::Column::Winner.eq(Side::Player), 1).finally(0);

    let rows = match_record::Entity::find()
        .select_only()
        .column_as(hero::Column::Id, "hero_id")
        .column_as(hero::Column::Name, "name")
        .column_as(
            Expr::col((match_record::Entity, match_record::Column::Id)).count(),
            "total",
        )
        .column_as(SimpleExpr::from(Func::sum(won)), "wins")
        .join(JoinType::InnerJoin, relation.def())
        .filter(condition(filter))
        .group_by(hero::Column::Id)
        .group_by(hero::Column::Name)
        .order_by_asc(hero::Column::Name)
        .order_by_asc(hero::Column::Id)
        .into_model::<TallyRow>()
        .all(db)
        .await?;

    debug!(?key, groups = rows.len(), "Grouped matches by hero");
    Ok(rows.into_iter().map(HeroTally::from).collect())
}

#[async_trait]
impl StatsSource for DatabaseConnection {
    #[instrument(skip(self))]
    async fn account_exists(&self, account_id: i32) -> Result<bool> {
        account_exists(self, account_id).await
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &MatchFilter) -> Result<u64> {
        count(self, filter).await
    }

    #[instrument(skip(self))]
    async fn group_by_hero(&self, filter: &MatchFilter, key: HeroKey) -> Result<Vec<HeroTally>> {
        group_by_hero(self, filter, key).await
    }
}

/// Reading through a transaction gives every query the same snapshot.
#[async_trait]
impl StatsSource for DatabaseTransaction {
    #[instrument(skip(self))]
    async fn account_exists(&self, account_id: i32) -> Result<bool> {
        account_exists(self, account_id).await
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &MatchFilter) -> Result<u64> {
        count(self, filter).await
    }

    #[instrument(skip(self))]
    async fn group_by_hero(&self, filter: &MatchFilter, key: HeroKey) -> Result<Vec<HeroTally>> {
        group_by_hero(self, filter, key).await
    }
}
