use sea_orm_migration::{prelude::*, schema::*};

use super::m20260902_000003_create_module_table::Module;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topic::Table)
                    .if_not_exists()
                    .col(pk_auto(Topic::Id))
                    .col(integer(Topic::ModuleId))
                    .col(string(Topic::TopicName))
                    .col(text_null(Topic::Description))
                    .col(integer(Topic::OrderSequence).default(0))
                    .col(boolean(Topic::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Topic::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_module_id")
                            .from(Topic::Table, Topic::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Topic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Topic {
    Table,
    Id,
    ModuleId,
    TopicName,
    Description,
    OrderSequence,
    IsActive,
    CreatedAt,
}
