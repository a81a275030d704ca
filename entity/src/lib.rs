//! SeaORM entities for the study hub schema.

pub mod prelude;

pub mod chapter;
pub mod module;
pub mod notification;
pub mod study_group;
pub mod study_group_member;
pub mod topic;
pub mod user;
pub mod user_module;
pub mod user_session;
