//! Enrollment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Enrolls a user in a module.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the enrolling user
/// - `module_id` - ID of the module
///
/// # Returns
/// - `Ok(entity::user_module::Model)` - Created enrollment row
/// - `Err(DbErr)` - Database error during insert
pub async fn enroll(
    db: &DatabaseConnection,
    user_id: i32,
    module_id: i32,
) -> Result<entity::user_module::Model, DbErr> {
    entity::user_module::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        module_id: ActiveValue::Set(module_id),
        enrolled_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
