use sea_orm::entity::prelude::*;

/// One side of a match. Used both for "who started" and for "who won".
///
/// The column is a closed set of two values; a draw cannot be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Side {
    /// The account owner.
    #[sea_orm(string_value = "player")]
    Player,
    #[sea_orm(string_value = "opponent")]
    Opponent,
}

/// One logged game. Records are append-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The hero the account owner played.
    pub hero_id: i32,
    /// The hero the opponent played. May equal `hero_id`.
    pub opponent_hero_id: i32,
    pub who_started: Side,
    pub winner: Side,
    /// Free-text note about sideboarding decisions.
    pub sideboard: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTimeUtc,
    /// The account that logged this match.
    pub account_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    /// The player's hero.
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id"
    )]
    Hero,
    /// The opponent's hero.
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::OpponentHeroId",
        to = "super::hero::Column::Id"
    )]
    OpponentHero,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the account owner won this match.
    pub fn is_win(&self) -> bool {
        self.winner == Side::Player
    }
}
