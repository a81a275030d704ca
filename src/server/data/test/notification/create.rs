use super::*;

/// Tests a created notification is unread, unsent and stores metadata as JSON text.
///
/// Expected: Ok with the metadata round-tripped through storage
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let notification = NotificationRepository::new(db)
        .create(user.id, content())
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.notification_type, NotificationType::GroupInvite);
    assert!(!notification.is_read);
    assert!(notification.sent_at.is_none());
    assert_eq!(
        notification.metadata,
        Some(serde_json::json!({ "group_id": 4 }))
    );

    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.metadata.as_deref(), Some(r#"{"group_id":4}"#));

    Ok(())
}
