use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Studies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Studies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Studies::Institution)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Studies::Degree).string_len(150).not_null())
                    .col(ColumnDef::new(Studies::Field).string_len(150).not_null())
                    .col(ColumnDef::new(Studies::StartDate).date().not_null())
                    .col(ColumnDef::new(Studies::EndDate).date())
                    .col(ColumnDef::new(Studies::Description).text().not_null())
                    .col(
                        ColumnDef::new(Studies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_studies_start_date
                ON studies (start_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Studies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Studies {
    Table,
    Id,
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
    Description,
    CreatedAt,
}
