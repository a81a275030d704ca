use super::*;

/// Tests soft delete keeps the row but marks it inactive.
///
/// Expected: Ok(true) and the row still present with is_active false
#[tokio::test]
async fn marks_module_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;

    let deleted = ModuleRepository::new(db).soft_delete(module.id).await?;

    assert!(deleted);
    let stored = entity::prelude::Module::find_by_id(module.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests soft-deleting an already inactive module reports no match.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_no_match_for_inactive_module() -> Result<(), DbErr> {
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

    let deleted = ModuleRepository::new(db).soft_delete(module.id).await?;

    assert!(!deleted);

    Ok(())
}
