use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;

/// A playable hero. Heroes are reference data seeded by a migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Pre-selected as the player's hero when logging a new match.
    /// At most one hero carries this flag.
    #[sea_orm(default_value = "false")]
    pub is_default: bool,
}

// Matches reference heroes twice (player and opponent side), so the
// relations are declared on `match_record` only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// All heroes ordered by name.
    pub async fn all_by_name<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// The hero flagged as default, if any.
    pub async fn find_default<C: ConnectionTrait>(db: &C) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::IsDefault.eq(true))
            .order_by_asc(Column::Id)
            .one(db)
            .await
    }
}
