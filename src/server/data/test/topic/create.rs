use super::*;

/// Tests the first topic of a module gets sequence 1.
///
/// Expected: Ok with order_sequence 1
#[tokio::test]
async fn first_topic_starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;

    let topic = TopicRepository::new(db)
        .create(CreateTopicParams {
            module_id: module.id,
            topic_name: "Basics".to_string(),
            description: None,
            order_sequence: None,
        })
        .await?;

    assert_eq!(topic.order_sequence, 1);
    assert_eq!(topic.chapter_count, 0);

    Ok(())
}

/// Tests a topic without explicit sequence is appended after the current maximum.
///
/// Expected: Ok with order_sequence one past the highest existing value
#[tokio::test]
async fn appends_after_highest_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;
    factory::topic::TopicFactory::new(db, module.id)
        .order_sequence(7)
        .build()
        .await?;

    let topic = TopicRepository::new(db)
        .create(CreateTopicParams {
            module_id: module.id,
            topic_name: "Next".to_string(),
            description: None,
            order_sequence: None,
        })
        .await?;

    assert_eq!(topic.order_sequence, 8);

    Ok(())
}

/// Tests an explicit sequence is kept as given.
///
/// Expected: Ok with order_sequence 3
#[tokio::test]
async fn keeps_explicit_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;
    factory::topic::TopicFactory::new(db, module.id)
        .order_sequence(7)
        .build()
        .await?;

    let topic = TopicRepository::new(db)
        .create(CreateTopicParams {
            module_id: module.id,
            topic_name: "Inserted".to_string(),
            description: Some("Goes early".to_string()),
            order_sequence: Some(3),
        })
        .await?;

    assert_eq!(topic.order_sequence, 3);
    assert_eq!(topic.description.as_deref(), Some("Goes early"));

    Ok(())
}
