use sea_orm_migration::prelude::*;

/// Creates the `duplas` table: a pair of players entered into a tournament.
///
/// The tournament reference is recorded by name, not by foreign key, so rows
/// are never touched when a tournament is deleted. Orphaned pairs are
/// tolerated on purpose.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Duplas {
    Table,
    Id,
    PlayerOne,
    PlayerTwo,
    Tournament,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Duplas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Duplas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Duplas::PlayerOne).string_len(100).not_null())
                    .col(ColumnDef::new(Duplas::PlayerTwo).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Duplas::Tournament)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Duplas::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Duplas::UpdatedAt).timestamp().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Duplas::Table).to_owned())
            .await
    }
}
