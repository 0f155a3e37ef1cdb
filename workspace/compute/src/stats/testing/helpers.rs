use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use model::entities::match_record::Side;
use model::entities::{account, hero, match_record};

pub type Result<T> = std::result::Result<T, DbErr>;

pub async fn new_account(db: &DatabaseConnection) -> Result<account::Model> {
    static ACCOUNT_ID: AtomicU64 = AtomicU64::new(0);

    let current_id = ACCOUNT_ID.fetch_add(1, Ordering::SeqCst);
    account::ActiveModel {
        username: Set(format!("player_{}", current_id)),
        password_hash: Set("not-a-real-hash".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Id of a seeded hero.
pub async fn hero_id(db: &DatabaseConnection, name: &str) -> Result<i32> {
    hero::Entity::find()
        .filter(hero::Column::Name.eq(name))
        .one(db)
        .await?
        .map(|hero| hero.id)
        .ok_or_else(|| DbErr::RecordNotFound(format!("hero {name}")))
}

pub async fn new_match(
    db: &DatabaseConnection,
    account: &account::Model,
    hero: i32,
    opponent: i32,
    winner: Side,
) -> Result<match_record::Model> {
    static MINUTE: AtomicU64 = AtomicU64::new(0);

    let offset = MINUTE.fetch_add(1, Ordering::SeqCst) as i64;
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(offset);

    match_record::ActiveModel {
        hero_id: Set(hero),
        opponent_hero_id: Set(opponent),
        who_started: Set(Side::Player),
        winner: Set(winner),
        sideboard: Set(None),
        comments: Set(None),
        created_at: Set(created_at),
        account_id: Set(account.id),
        ..Default::default()
    }
    .insert(db)
    .await
}
