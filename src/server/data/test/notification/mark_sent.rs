use super::*;

/// Tests mark-sent stamps unsent rows and removes them from pending.
///
/// Expected: Ok(2) and an empty pending batch afterwards
#[tokio::test]
async fn stamps_sent_and_clears_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let a = factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(Utc::now() - Duration::minutes(10))
        .build()
        .await?;
    let b = factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let repo = NotificationRepository::new(db);

    let updated = repo.mark_sent(&[a.id, b.id], Utc::now()).await?;

    assert_eq!(updated, 2);
    assert!(repo.pending(Utc::now(), 100).await?.is_empty());

    Ok(())
}

/// Tests an existing sent_at is never overwritten.
///
/// Expected: Ok(0) and the original timestamp kept
#[tokio::test]
async fn never_overwrites_sent_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let original = Utc::now() - Duration::days(1);
    let sent = factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(original)
        .sent_at(original)
        .build()
        .await?;

    let updated = NotificationRepository::new(db)
        .mark_sent(&[sent.id], Utc::now())
        .await?;

    assert_eq!(updated, 0);
    let stored = entity::prelude::Notification::find_by_id(sent.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.sent_at, sent.sent_at);

    Ok(())
}
