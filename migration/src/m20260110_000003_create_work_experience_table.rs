use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkExperience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperience::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::Position)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperience::StartDate).date().not_null())
                    .col(ColumnDef::new(WorkExperience::EndDate).date())
                    .col(
                        ColumnDef::new(WorkExperience::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::Technologies)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Display order is reverse chronological
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_work_experience_start_date
                ON work_experience (start_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkExperience::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum WorkExperience {
    Table,
    Id,
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
    Technologies,
    CreatedAt,
}
