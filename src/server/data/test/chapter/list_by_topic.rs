use super::*;

/// Tests chapters are ordered by sequence and exclude inactive rows.
///
/// Expected: Ok with active chapters in order
#[tokio::test]
async fn lists_active_chapters_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;
    let topic = factory::topic::create_topic(db, module.id).await?;
    factory::chapter::ChapterFactory::new(db, topic.id)
        .chapter_name("Second")
        .order_sequence(2)
        .build()
        .await?;
    factory::chapter::ChapterFactory::new(db, topic.id)
        .chapter_name("First")
        .order_sequence(1)
        .build()
        .await?;
    factory::chapter::ChapterFactory::new(db, topic.id)
        .chapter_name("Hidden")
        .order_sequence(3)
        .active(false)
        .build()
        .await?;

    let chapters = ChapterRepository::new(db).list_by_topic(topic.id).await?;
    let names: Vec<&str> = chapters.iter().map(|c| c.chapter_name.as_str()).collect();

    assert_eq!(names, vec!["First", "Second"]);

    Ok(())
}
