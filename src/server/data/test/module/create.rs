use super::*;

/// Tests creating a module stores every field.
///
/// Expected: Ok with an active module and zero counts
#[tokio::test]
async fn creates_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = ModuleRepository::new(db)
        .create(CreateModuleParams {
            module_code: "CS101".to_string(),
            module_name: "Programming".to_string(),
            description: Some("First year programming".to_string()),
            university: Some("UCL".to_string()),
        })
        .await?;

    assert_eq!(module.module_code, "CS101");
    assert_eq!(module.counts.topic_count, 0);

    let stored = entity::prelude::Module::find_by_id(module.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_active);
    assert_eq!(stored.university.as_deref(), Some("UCL"));

    Ok(())
}

/// Tests a duplicate code surfaces as a unique constraint violation.
///
/// Expected: Err(DbErr) classified as UniqueConstraintViolation
#[tokio::test]
async fn duplicate_code_violates_unique_constraint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::module::ModuleFactory::new(db)
        .module_code("CS101")
        .build()
        .await?;

    let result = ModuleRepository::new(db)
        .create(CreateModuleParams {
            module_code: "CS101".to_string(),
            module_name: "Another".to_string(),
            description: None,
            university: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
