use super::*;

/// Tests only the caller's unread notifications are counted and updated.
///
/// Expected: Ok(2), then Ok(0) on a repeated call
#[tokio::test]
async fn marks_all_unread_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;
    let untouched = factory::create_notification(db, other.id).await?;
    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.mark_all_read(user.id).await?, 0);

    let stored = entity::prelude::Notification::find_by_id(untouched.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_read);

    Ok(())
}
