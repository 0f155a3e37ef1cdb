use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create accounts table
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(string_len(Accounts::Username, 80).unique_key())
                    .col(string_len(Accounts::PasswordHash, 200))
                    .to_owned(),
            )
            .await?;

        // Create heroes table
        manager
            .create_table(
                Table::create()
                    .table(Heroes::Table)
                    .if_not_exists()
                    .col(pk_auto(Heroes::Id))
                    .col(string_len(Heroes::Name, 100))
                    .col(boolean(Heroes::IsDefault).default(false))
                    .to_owned(),
            )
            .await?;

        // Create matches table
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(integer(Matches::HeroId))
                    .col(integer(Matches::OpponentHeroId))
                    .col(string_len(Matches::WhoStarted, 10))
                    .col(string_len(Matches::Winner, 10))
                    .col(text_null(Matches::Sideboard))
                    .col(text_null(Matches::Comments))
                    .col(timestamp_with_time_zone(Matches::CreatedAt))
                    .col(integer(Matches::AccountId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_hero")
                            .from(Matches::Table, Matches::HeroId)
                            .to(Heroes::Table, Heroes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_opponent_hero")
                            .from(Matches::Table, Matches::OpponentHeroId)
                            .to(Heroes::Table, Heroes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_account")
                            .from(Matches::Table, Matches::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Every stats query filters by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_matches_account_id")
                    .table(Matches::Table)
                    .col(Matches::AccountId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Heroes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Username,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Heroes {
    Table,
    Id,
    Name,
    IsDefault,
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    HeroId,
    OpponentHeroId,
    WhoStarted,
    Winner,
    Sideboard,
    Comments,
    CreatedAt,
    AccountId,
}
