use super::*;

/// Tests only provided fields change and updated_at moves forward.
///
/// Expected: Ok(Some) with the new name and the original university
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::ModuleFactory::new(db)
        .module_name("Old")
        .university("UCL")
        .build()
        .await?;

    let updated = ModuleRepository::new(db)
        .update(
            module.id,
            UpdateModuleParams {
                module_name: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.module_name, "New");
    assert_eq!(updated.university.as_deref(), Some("UCL"));
    assert_eq!(updated.module_code, module.module_code);
    assert!(updated.updated_at >= module.updated_at);

    Ok(())
}

/// Tests updating a soft-deleted module does nothing.
///
/// Expected: Ok(None) and the stored name unchanged
#[tokio::test]
async fn skips_inactive_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::ModuleFactory::new(db)
        .module_name("Old")
        .active(false)
        .build()
        .await?;

    let result = ModuleRepository::new(db)
        .update(
            module.id,
            UpdateModuleParams {
                module_name: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = entity::prelude::Module::find_by_id(module.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.module_name, "Old");

    Ok(())
}

/// Tests `Some(None)` clears a nullable column while `None` leaves it alone.
///
/// Expected: Ok(Some) with description NULL and university unchanged
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::ModuleFactory::new(db)
        .description("Graphs and trees")
        .university("UCL")
        .build()
        .await?;

    let updated = ModuleRepository::new(db)
        .update(
            module.id,
            UpdateModuleParams {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.university.as_deref(), Some("UCL"));

    Ok(())
}
