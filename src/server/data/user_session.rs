//! Bearer session lookups.

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct UserSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the session owning `token` if it has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Session exists and `expires_at > now`
    /// - `Ok(None)` - Unknown or expired token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::user_session::Model>, DbErr> {
        entity::prelude::UserSession::find()
            .filter(entity::user_session::Column::SessionToken.eq(token))
            .filter(entity::user_session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }
}
