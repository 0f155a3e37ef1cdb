use sea_orm::entity::prelude::*;
use sea_orm::QueryFilter;

/// A player account. All match data is partitioned by it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt digest of the account password.
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// An account owns all the matches it logged.
    #[sea_orm(has_many = "super::match_record::Entity")]
    MatchRecord,
}

impl Related<super::match_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Looks up an account by its unique username.
    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }
}
