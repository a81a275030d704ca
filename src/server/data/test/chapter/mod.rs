use crate::server::{data::chapter::ChapterRepository, model::module::CreateChapterParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_by_topic;
