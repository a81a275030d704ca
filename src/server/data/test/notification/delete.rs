use super::*;

/// Tests deleting removes the row permanently.
///
/// Expected: Ok(true) and no row left
#[tokio::test]
async fn deletes_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let deleted = NotificationRepository::new(db)
        .delete(notification.id, user.id)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a missing notification reports no match.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let deleted = NotificationRepository::new(db).delete(999, user.id).await?;

    assert!(!deleted);

    Ok(())
}
