use super::*;

/// Tests listing returns only the owner's notifications, newest first.
///
/// Expected: Ok with the user's two notifications in descending creation order
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let older = factory::notification::NotificationFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::notification::NotificationFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let notifications = NotificationRepository::new(db)
        .list(list_params(user.id))
        .await?;
    let ids: Vec<i32> = notifications.iter().map(|n| n.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests unread and type filters combine.
///
/// Expected: Ok with only the unread system notification
#[tokio::test]
async fn filters_by_unread_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let target = factory::notification::NotificationFactory::new(db, user.id)
        .notification_type(NotificationType::System)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .notification_type(NotificationType::System)
        .read(true)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .notification_type(NotificationType::Message)
        .build()
        .await?;

    let notifications = NotificationRepository::new(db)
        .list(ListNotificationsParams {
            unread_only: true,
            notification_type: Some(NotificationType::System),
            ..list_params(user.id)
        })
        .await?;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, target.id);

    Ok(())
}

/// Tests stored metadata is parsed and corrupt metadata becomes None.
///
/// Expected: Ok with parsed JSON for one row and None for the other
#[tokio::test]
async fn parses_metadata_and_tolerates_corrupt_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let good = factory::notification::NotificationFactory::new(db, user.id)
        .metadata(serde_json::json!({ "session_id": 12 }))
        .build()
        .await?;
    let corrupt = factory::create_notification(db, user.id).await?;
    let mut corrupt_model: entity::notification::ActiveModel = corrupt.into();
    corrupt_model.metadata = ActiveValue::Set(Some("{not json".to_string()));
    let corrupt = corrupt_model.update(db).await?;

    let notifications = NotificationRepository::new(db)
        .list(list_params(user.id))
        .await?;

    let parsed = notifications.iter().find(|n| n.id == good.id).unwrap();
    assert_eq!(
        parsed.metadata,
        Some(serde_json::json!({ "session_id": 12 }))
    );
    let unparsed = notifications.iter().find(|n| n.id == corrupt.id).unwrap();
    assert_eq!(unparsed.metadata, None);

    Ok(())
}
