use super::*;

/// Tests pending contains only due, unsent notifications ordered by schedule.
///
/// Expected: Ok with the two due rows, oldest schedule first
#[tokio::test]
async fn returns_due_unsent_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let recent = factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(now - Duration::minutes(1))
        .build()
        .await?;
    let overdue = factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(now - Duration::hours(1))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(now + Duration::hours(1))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .scheduled_for(now - Duration::hours(2))
        .sent_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::create_notification(db, user.id).await?;

    let pending = NotificationRepository::new(db).pending(now, 100).await?;
    let ids: Vec<i32> = pending.iter().map(|n| n.id).collect();

    assert_eq!(ids, vec![overdue.id, recent.id]);

    Ok(())
}

/// Tests the limit bounds the batch.
///
/// Expected: Ok with a single notification
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for minutes in 1..=3 {
        factory::notification::NotificationFactory::new(db, user.id)
            .scheduled_for(Utc::now() - Duration::minutes(minutes))
            .build()
            .await?;
    }

    let pending = NotificationRepository::new(db)
        .pending(Utc::now(), 1)
        .await?;

    assert_eq!(pending.len(), 1);

    Ok(())
}

/// Tests notifications without a schedule are never handed to delivery workers.
///
/// Expected: Ok(empty) even though the row is unsent
#[tokio::test]
async fn skips_unscheduled_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;

    let pending = NotificationRepository::new(db)
        .pending(Utc::now() + Duration::days(1), 100)
        .await?;

    assert!(pending.is_empty());

    Ok(())
}
