use sea_orm_migration::prelude::*;

/// Creates the `tournaments` table. No uniqueness constraints beyond the
/// primary key; two tournaments with identical fields are distinct rows.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Tournaments {
    Table,
    Id,
    Name,
    Date,
    Place,
    Photo,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournaments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tournaments::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Tournaments::Date).date().not_null())
                    .col(
                        ColumnDef::new(Tournaments::Place)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tournaments::Photo).string_len(500).not_null())
                    .col(ColumnDef::new(Tournaments::Description).text().null())
                    .col(ColumnDef::new(Tournaments::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Tournaments::UpdatedAt).timestamp().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tournaments::Table).to_owned())
            .await
    }
}
