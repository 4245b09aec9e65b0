pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_profiles_table;
mod m20260110_000002_create_introduction_table;
mod m20260110_000003_create_work_experience_table;
mod m20260110_000004_create_studies_table;
mod m20260110_000005_create_technical_skills_table;
mod m20260110_000006_create_projects_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_profiles_table::Migration),
            Box::new(m20260110_000002_create_introduction_table::Migration),
            Box::new(m20260110_000003_create_work_experience_table::Migration),
            Box::new(m20260110_000004_create_studies_table::Migration),
            Box::new(m20260110_000005_create_technical_skills_table::Migration),
            Box::new(m20260110_000006_create_projects_table::Migration),
        ]
    }
}
