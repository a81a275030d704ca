use super::*;

/// Tests topics are ordered by sequence then name and exclude inactive rows.
///
/// Expected: Ok with active topics in order
#[tokio::test]
async fn lists_active_topics_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;
    factory::topic::TopicFactory::new(db, module.id)
        .topic_name("Recursion")
        .order_sequence(2)
        .build()
        .await?;
    factory::topic::TopicFactory::new(db, module.id)
        .topic_name("Arrays")
        .order_sequence(2)
        .build()
        .await?;
    factory::topic::TopicFactory::new(db, module.id)
        .topic_name("Variables")
        .order_sequence(1)
        .build()
        .await?;
    factory::topic::TopicFactory::new(db, module.id)
        .topic_name("Retired")
        .order_sequence(0)
        .active(false)
        .build()
        .await?;

    let topics = TopicRepository::new(db).list_by_module(module.id).await?;
    let names: Vec<&str> = topics.iter().map(|t| t.topic_name.as_str()).collect();

    assert_eq!(names, vec!["Variables", "Arrays", "Recursion"]);

    Ok(())
}

/// Tests chapter counts ignore inactive chapters.
///
/// Expected: Ok with chapter_count 1
#[tokio::test]
async fn counts_active_chapters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, topic, _chapter) = factory::helpers::create_module_hierarchy(db).await?;
    factory::chapter::ChapterFactory::new(db, topic.id)
        .active(false)
        .build()
        .await?;

    let topics = TopicRepository::new(db).list_by_module(module.id).await?;

    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].chapter_count, 1);

    Ok(())
}
