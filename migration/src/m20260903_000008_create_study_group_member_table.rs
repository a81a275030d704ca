use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User,
    m20260903_000007_create_study_group_table::StudyGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyGroupMember::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyGroupMember::Id))
                    .col(integer(StudyGroupMember::GroupId))
                    .col(integer(StudyGroupMember::UserId))
                    .col(string_len(StudyGroupMember::Role, 16).default("member"))
                    .col(
                        timestamp_with_time_zone(StudyGroupMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_group_member_group_id")
                            .from(StudyGroupMember::Table, StudyGroupMember::GroupId)
                            .to(StudyGroup::Table, StudyGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_group_member_user_id")
                            .from(StudyGroupMember::Table, StudyGroupMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_study_group_member_unique")
                    .table(StudyGroupMember::Table)
                    .col(StudyGroupMember::GroupId)
                    .col(StudyGroupMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyGroupMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyGroupMember {
    Table,
    Id,
    GroupId,
    UserId,
    Role,
    JoinedAt,
}
