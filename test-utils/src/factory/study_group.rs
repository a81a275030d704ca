//! Study group factory for creating groups and their memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::study_group_member::GroupRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating study groups.
///
/// # Example
///
/// ```rust,ignore
/// let group = StudyGroupFactory::new(&db, creator.id)
///     .module_id(module.id)
///     .build()
///     .await?;
/// ```
pub struct StudyGroupFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    name: String,
    module_id: Option<i32>,
    is_active: bool,
}

impl<'a> StudyGroupFactory<'a> {
    /// Creates a new StudyGroupFactory with default values.
    ///
    /// Defaults to an active group named `"Study Group {id}"` with no module.
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            name: format!("Study Group {}", id),
            module_id: None,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attaches the group to a module.
    pub fn module_id(mut self, module_id: i32) -> Self {
        self.module_id = Some(module_id);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::study_group::Model, DbErr> {
        entity::study_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            module_id: ActiveValue::Set(self.module_id),
            creator_id: ActiveValue::Set(self.creator_id),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active study group owned by `creator_id`.
pub async fn create_study_group(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::study_group::Model, DbErr> {
    StudyGroupFactory::new(db, creator_id).build().await
}

/// Adds a user to a study group with the given role.
pub async fn add_member(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
    role: GroupRole,
) -> Result<entity::study_group_member::Model, DbErr> {
    entity::study_group_member::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
