use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260902_000003_create_module_table::Module,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyGroup::Id))
                    .col(string(StudyGroup::Name))
                    .col(text_null(StudyGroup::Description))
                    .col(integer_null(StudyGroup::ModuleId))
                    .col(integer(StudyGroup::CreatorId))
                    .col(boolean(StudyGroup::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(StudyGroup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_group_module_id")
                            .from(StudyGroup::Table, StudyGroup::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_group_creator_id")
                            .from(StudyGroup::Table, StudyGroup::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyGroup {
    Table,
    Id,
    Name,
    Description,
    ModuleId,
    CreatorId,
    IsActive,
    CreatedAt,
}
