use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Introduction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Introduction::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Introduction::Name)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Introduction::Role)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Introduction::Description).text().not_null())
                    .col(ColumnDef::new(Introduction::AvatarUrl).text())
                    .col(ColumnDef::new(Introduction::GithubUrl).text())
                    .col(ColumnDef::new(Introduction::LinkedinUrl).text())
                    .col(ColumnDef::new(Introduction::DiscordHandle).string_len(100))
                    .col(ColumnDef::new(Introduction::ContactEmail).string_len(255))
                    .col(
                        ColumnDef::new(Introduction::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The application always addresses the single logical row by id 1.
        // Seed it so the public page has something to render before the
        // owner's first edit.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO introduction (id, name, role, description)
                VALUES (1, 'Your Name', 'Your Role', 'Tell visitors about yourself.')
                ON CONFLICT (id) DO NOTHING;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Introduction::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Introduction {
    Table,
    Id,
    Name,
    Role,
    Description,
    AvatarUrl,
    GithubUrl,
    LinkedinUrl,
    DiscordHandle,
    ContactEmail,
    CreatedAt,
}
