//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// usernames, module codes and session tokens across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a regular user together with a valid bearer session.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, session))` - The user and the session whose `session_token` authenticates them
/// - `Err(DbErr)` - Database error during creation
pub async fn create_authenticated_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user_session::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let session = crate::factory::user_session::create_session(db, user.id).await?;

    Ok((user, session))
}

/// Creates an admin user together with a valid bearer session.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, session))` - The admin and their session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_authenticated_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user_session::Model), DbErr> {
    let user = crate::factory::user::create_admin(db).await?;
    let session = crate::factory::user_session::create_session(db, user.id).await?;

    Ok((user, session))
}

/// Creates a module with one topic and one chapter beneath it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((module, topic, chapter))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_module_hierarchy(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::module::Model,
        entity::topic::Model,
        entity::chapter::Model,
    ),
    DbErr,
> {
    let module = crate::factory::module::create_module(db).await?;
    let topic = crate::factory::topic::create_topic(db, module.id).await?;
    let chapter = crate::factory::chapter::create_chapter(db, topic.id).await?;

    Ok((module, topic, chapter))
}
