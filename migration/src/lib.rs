pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_user_session_table;
mod m20260902_000003_create_module_table;
mod m20260902_000004_create_topic_table;
mod m20260902_000005_create_chapter_table;
mod m20260903_000006_create_user_module_table;
mod m20260903_000007_create_study_group_table;
mod m20260903_000008_create_study_group_member_table;
mod m20260904_000009_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_user_session_table::Migration),
            Box::new(m20260902_000003_create_module_table::Migration),
            Box::new(m20260902_000004_create_topic_table::Migration),
            Box::new(m20260902_000005_create_chapter_table::Migration),
            Box::new(m20260903_000006_create_user_module_table::Migration),
            Box::new(m20260903_000007_create_study_group_table::Migration),
            Box::new(m20260903_000008_create_study_group_member_table::Migration),
            Box::new(m20260904_000009_create_notification_table::Migration),
        ]
    }
}
