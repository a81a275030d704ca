use sea_orm_migration::{prelude::*, schema::*};

use super::m20260902_000004_create_topic_table::Topic;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_auto(Chapter::Id))
                    .col(integer(Chapter::TopicId))
                    .col(string(Chapter::ChapterName))
                    .col(text_null(Chapter::Summary))
                    .col(integer(Chapter::OrderSequence).default(0))
                    .col(boolean(Chapter::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Chapter::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_topic_id")
                            .from(Chapter::Table, Chapter::TopicId)
                            .to(Topic::Table, Topic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapter {
    Table,
    Id,
    TopicId,
    ChapterName,
    Summary,
    OrderSequence,
    IsActive,
    CreatedAt,
}
