use super::*;

/// Tests finding an active module returns it with counts.
///
/// Expected: Ok(Some) with topic_count 1
#[tokio::test]
async fn finds_active_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (module, _topic, _chapter) = factory::helpers::create_module_hierarchy(db).await?;

    let found = ModuleRepository::new(db).find_active_by_id(module.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.module_code, module.module_code);
    assert_eq!(found.counts.topic_count, 1);

    Ok(())
}

/// Tests a soft-deleted module is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_inactive_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::ModuleFactory::new(db)
        .active(false)
        .build()
        .await?;

    let found = ModuleRepository::new(db).find_active_by_id(module.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests an unknown ID is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ModuleRepository::new(db).find_active_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
