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
                    .table(UserModule::Table)
                    .if_not_exists()
                    .col(pk_auto(UserModule::Id))
                    .col(integer(UserModule::UserId))
                    .col(integer(UserModule::ModuleId))
                    .col(
                        timestamp_with_time_zone(UserModule::EnrolledAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_module_user_id")
                            .from(UserModule::Table, UserModule::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_module_module_id")
                            .from(UserModule::Table, UserModule::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_module_unique")
                    .table(UserModule::Table)
                    .col(UserModule::UserId)
                    .col(UserModule::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserModule {
    Table,
    Id,
    UserId,
    ModuleId,
    EnrolledAt,
}
