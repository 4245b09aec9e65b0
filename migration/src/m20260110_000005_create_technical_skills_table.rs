use sea_orm_migration::prelude::*;

use crate::m20260110_000001_create_profiles_table::Profiles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechnicalSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechnicalSkills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Category)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Level)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TechnicalSkills::Description).text())
                    .col(ColumnDef::new(TechnicalSkills::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(TechnicalSkills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_technical_skills_user_id")
                            .from(TechnicalSkills::Table, TechnicalSkills::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Grouped display: category, then name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_technical_skills_category_name
                ON technical_skills (category, name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TechnicalSkills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TechnicalSkills {
    Table,
    Id,
    Name,
    Category,
    Level,
    Description,
    UserId,
    CreatedAt,
}
