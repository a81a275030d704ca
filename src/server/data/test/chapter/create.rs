use super::*;

/// Tests a chapter without explicit sequence is appended to its topic.
///
/// Expected: Ok with order_sequence one past the topic's highest chapter
#[tokio::test]
async fn appends_chapter_to_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_module, topic, existing) = factory::helpers::create_module_hierarchy(db).await?;

    let chapter = ChapterRepository::new(db)
        .create(CreateChapterParams {
            topic_id: topic.id,
            chapter_name: "Loops".to_string(),
            summary: Some("for and while".to_string()),
            order_sequence: None,
        })
        .await?;

    assert_eq!(chapter.order_sequence, existing.order_sequence + 1);
    assert_eq!(chapter.summary.as_deref(), Some("for and while"));
    assert_eq!(chapter.topic_id, topic.id);

    Ok(())
}
