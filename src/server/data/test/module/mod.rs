use crate::server::{
    data::module::ModuleRepository,
    model::module::{CreateModuleParams, ListModulesParams, UpdateModuleParams},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_active_by_id;
mod list;
mod soft_delete;
mod update;

fn list_params() -> ListModulesParams {
    ListModulesParams {
        university: None,
        search: None,
        limit: 20,
        offset: 0,
    }
}
