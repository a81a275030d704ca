use super::*;

/// Tests listing excludes soft-deleted modules.
///
/// Expected: Ok with only the active module
#[tokio::test]
async fn excludes_inactive_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::module::ModuleFactory::new(db)
        .module_code("CS101")
        .build()
        .await?;
    factory::module::ModuleFactory::new(db)
        .module_code("CS102")
        .active(false)
        .build()
        .await?;

    let modules = ModuleRepository::new(db).list(list_params()).await?;

    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].id, active.id);

    Ok(())
}

/// Tests modules are ordered by code.
///
/// Expected: Ok with modules sorted ascending by module_code
#[tokio::test]
async fn orders_by_module_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["MATH200", "BIO100", "CS300"] {
        factory::module::ModuleFactory::new(db)
            .module_code(code)
            .build()
            .await?;
    }

    let modules = ModuleRepository::new(db).list(list_params()).await?;
    let codes: Vec<&str> = modules.iter().map(|m| m.module_code.as_str()).collect();

    assert_eq!(codes, vec!["BIO100", "CS300", "MATH200"]);

    Ok(())
}

/// Tests search matches code, name or description case-insensitively.
///
/// Expected: Ok with the three matching modules and not the fourth
#[tokio::test]
async fn search_is_case_insensitive_over_three_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::module::ModuleFactory::new(db)
        .module_code("COMP1000")
        .module_name("Intro")
        .build()
        .await?;
    factory::module::ModuleFactory::new(db)
        .module_code("X200")
        .module_name("Computer Architecture")
        .build()
        .await?;
    factory::module::ModuleFactory::new(db)
        .module_code("Y300")
        .module_name("Algorithms")
        .description("Complexity and COMPutation")
        .build()
        .await?;
    factory::module::ModuleFactory::new(db)
        .module_code("HIST100")
        .module_name("History")
        .description("Wars and treaties")
        .build()
        .await?;

    let modules = ModuleRepository::new(db)
        .list(ListModulesParams {
            search: Some("comp".to_string()),
            ..list_params()
        })
        .await?;
    let codes: Vec<&str> = modules.iter().map(|m| m.module_code.as_str()).collect();

    assert_eq!(codes, vec!["COMP1000", "X200", "Y300"]);

    Ok(())
}

/// Tests university filter is an exact match.
///
/// Expected: Ok with only modules of the requested university
#[tokio::test]
async fn filters_by_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ucl = factory::module::ModuleFactory::new(db)
        .university("UCL")
        .build()
        .await?;
    factory::module::ModuleFactory::new(db)
        .university("KCL")
        .build()
        .await?;
    factory::module::create_module(db).await?;

    let modules = ModuleRepository::new(db)
        .list(ListModulesParams {
            university: Some("UCL".to_string()),
            ..list_params()
        })
        .await?;

    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].id, ucl.id);

    Ok(())
}

/// Tests limit and offset window the ordered result.
///
/// Expected: Ok with the second and third modules
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["A1", "A2", "A3", "A4"] {
        factory::module::ModuleFactory::new(db)
            .module_code(code)
            .build()
            .await?;
    }

    let modules = ModuleRepository::new(db)
        .list(ListModulesParams {
            limit: 2,
            offset: 1,
            ..list_params()
        })
        .await?;
    let codes: Vec<&str> = modules.iter().map(|m| m.module_code.as_str()).collect();

    assert_eq!(codes, vec!["A2", "A3"]);

    Ok(())
}

/// Tests each listed module carries counts of its active dependents.
///
/// Expected: Ok with topic, enrollment and study group counts ignoring inactive rows
#[tokio::test]
async fn includes_dependent_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::module::create_module(db).await?;
    let empty = factory::module::create_module(db).await?;
    factory::topic::create_topic(db, module.id).await?;
    factory::topic::create_topic(db, module.id).await?;
    factory::topic::TopicFactory::new(db, module.id)
        .active(false)
        .build()
        .await?;

    let student_a = factory::create_user(db).await?;
    let student_b = factory::create_user(db).await?;
    factory::enroll(db, student_a.id, module.id).await?;
    factory::enroll(db, student_b.id, module.id).await?;

    factory::study_group::StudyGroupFactory::new(db, student_a.id)
        .module_id(module.id)
        .build()
        .await?;
    factory::study_group::StudyGroupFactory::new(db, student_b.id)
        .module_id(module.id)
        .active(false)
        .build()
        .await?;

    let modules = ModuleRepository::new(db).list(list_params()).await?;

    let listed = modules.iter().find(|m| m.id == module.id).unwrap();
    assert_eq!(listed.counts.topic_count, 2);
    assert_eq!(listed.counts.enrollment_count, 2);
    assert_eq!(listed.counts.study_group_count, 1);

    let listed_empty = modules.iter().find(|m| m.id == empty.id).unwrap();
    assert_eq!(listed_empty.counts.topic_count, 0);
    assert_eq!(listed_empty.counts.enrollment_count, 0);
    assert_eq!(listed_empty.counts.study_group_count, 0);

    Ok(())
}
