use super::*;

/// Tests one row is inserted per recipient with identical content.
///
/// Expected: Ok(3) and three matching rows
#[tokio::test]
async fn inserts_one_row_per_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut user_ids = Vec::new();
    for _ in 0..3 {
        user_ids.push(factory::create_user(db).await?.id);
    }

    let inserted = NotificationRepository::new(db)
        .create_many(&user_ids, content())
        .await?;

    assert_eq!(inserted, 3);
    let rows = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.title == "Join us"));

    Ok(())
}

/// Tests an empty recipient list inserts nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_recipients_insert_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inserted = NotificationRepository::new(db)
        .create_many(&[], content())
        .await?;

    assert_eq!(inserted, 0);

    Ok(())
}
