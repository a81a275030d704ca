use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(pk_auto(Module::Id))
                    .col(string_uniq(Module::ModuleCode))
                    .col(string(Module::ModuleName))
                    .col(text_null(Module::Description))
                    .col(string_null(Module::University))
                    .col(boolean(Module::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Module::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Module::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_module_university")
                    .table(Module::Table)
                    .col(Module::University)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Module::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Module {
    Table,
    Id,
    ModuleCode,
    ModuleName,
    Description,
    University,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
