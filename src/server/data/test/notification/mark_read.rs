use super::*;

/// Tests marking read stamps read_at once and is idempotent.
///
/// Expected: Ok(Some) both times with an unchanged read_at on the second call
#[tokio::test]
async fn marks_read_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;
    let repo = NotificationRepository::new(db);

    let first = repo.mark_read(notification.id, user.id).await?.unwrap();
    assert!(first.is_read);
    assert!(first.read_at.is_some());

    let second = repo.mark_read(notification.id, user.id).await?.unwrap();
    assert!(second.is_read);
    assert_eq!(second.read_at, first.read_at);

    Ok(())
}

/// Tests another user's notification cannot be marked read.
///
/// Expected: Ok(None) and the row still unread
#[tokio::test]
async fn ignores_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let result = NotificationRepository::new(db)
        .mark_read(notification.id, intruder.id)
        .await?;

    assert!(result.is_none());
    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_read);

    Ok(())
}
