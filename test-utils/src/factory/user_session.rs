//! Session factory for creating bearer tokens in tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating user sessions.
///
/// Defaults to a unique token that expires one day from now.
pub struct UserSessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    session_token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> UserSessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            session_token: format!("token-{}-{}", user_id, id),
            expires_at: Utc::now() + Duration::days(1),
        }
    }

    /// Sets the bearer token value.
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = token.into();
        self
    }

    /// Sets the expiry instant.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::user_session::Model, DbErr> {
        entity::user_session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            session_token: ActiveValue::Set(self.session_token),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(self.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid session for the user.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_session::Model, DbErr> {
    UserSessionFactory::new(db, user_id).build().await
}
