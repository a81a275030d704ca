use super::*;

/// Tests a valid session authenticates its user.
///
/// Verifies that the AuthGuard resolves the bearer token to the session's user
/// when no permissions are required.
///
/// Expected: Ok(User) matching the session owner
#[tokio::test]
async fn authenticates_valid_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, session) = factory::helpers::create_authenticated_user(db).await?;
    let headers = bearer(&session.session_token);

    let result = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, user.username);

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an unknown token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_authenticated_user(db).await?;
    let headers = bearer("not-a-session");

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired session no longer authenticates.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let session = factory::user_session::UserSessionFactory::new(db, user.id)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let headers = bearer(&session.session_token);

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a deactivated user cannot authenticate with a live session.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let session = factory::create_session(db, user.id).await?;
    let headers = bearer(&session.session_token);

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, session) = factory::helpers::create_authenticated_admin(db).await?;
    let headers = bearer(&session.session_token);

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(result.id, admin.id);
    assert!(result.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, session) = factory::helpers::create_authenticated_user(db).await?;
    let headers = bearer(&session.session_token);

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}
