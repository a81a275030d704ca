use crate::server::{data::topic::TopicRepository, model::module::CreateTopicParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_by_module;
