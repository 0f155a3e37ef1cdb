use model::entities::{hero, prelude::Hero};
use sea_orm::{EntityTrait, PaginatorTrait};
use sea_orm_migration::prelude::*;

use crate::entity_iden::EntityIden;

/// Hero reference data: `(name, is_default)`. Exactly one entry is the default.
pub const DEFAULT_HEROES: &[(&str, bool)] = &[
    ("Oscilio", true),
    ("Katsu", false),
    ("Arakni 5L!p3d 7hRu 7h3 cR4X", false),
    ("Kayo Underhanded Cheat", false),
    ("Lyath Goldmane", false),
    ("Pleiades", false),
    ("Tuffnut", false),
    ("Arakni Huntsman", false),
    ("Arakni Marionette", false),
    ("Betsy", false),
    ("Boltyn", false),
    ("Bravo", false),
    ("Cindra", false),
    ("Dash IO", false),
    ("Dorinthea", false),
    ("Fai", false),
    ("Fang", false),
    ("Florian", false),
    ("Gravy Bones", false),
    ("Ira", false),
    ("Jarl", false),
    ("Kassai", false),
    ("Kayo Armed and Dangerous", false),
    ("Levia", false),
    ("Marlynn", false),
    ("Maxx", false),
    ("Olympia", false),
    ("Rhinar", false),
    ("Puffin", false),
    ("Riptide", false),
    ("Teklovossen", false),
    ("Uzuri", false),
    ("Valda", false),
    ("Verdance", false),
    ("Victor", false),
    ("Vynnset", false),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Heroes loaded by other means are left alone
        let existing = Hero::find().count(manager.get_connection()).await?;
        if existing > 0 {
            return Ok(());
        }

        let mut insert = Query::insert()
            .into_table(Hero::table())
            .columns(Hero::columns([hero::Column::Name, hero::Column::IsDefault]))
            .to_owned();

        for (name, is_default) in DEFAULT_HEROES {
            insert
                .values([(*name).into(), (*is_default).into()])
                .map_err(|e| DbErr::Custom(format!("invalid hero seed row: {e}")))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names = DEFAULT_HEROES.iter().map(|(name, _)| *name);
        let delete = Query::delete()
            .from_table(Hero::table())
            .and_where(Expr::col(hero::Column::Name).is_in(names))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
