use axum::http::HeaderMap;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_session::UserSessionRepository},
    error::{auth::AuthError, AppError},
    middleware::bearer::bearer_token,
    model::user::User,
};

pub enum Permission {
    /// Caller's application role is `admin`.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated caller holding all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Unknown or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Session user missing or inactive
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(session) = UserSessionRepository::new(self.db)
            .find_valid_by_token(token, Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        let user = match UserRepository::new(self.db)
            .find_by_id(session.user_id)
            .await?
        {
            Some(user) if user.is_active => user,
            _ => return Err(AuthError::UserNotInDatabase(session.user_id).into()),
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
