//! Module data repository.
//!
//! Provides catalog reads with aggregated dependent counts, creation, whitelisted
//! updates and soft deletion. Every read filters on `is_active`.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::module::{
    CreateModuleParams, ListModulesParams, Module, ModuleCounts, UpdateModuleParams,
};

pub struct ModuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active modules ordered by code with their dependent counts.
    ///
    /// # Arguments
    /// - `params` - Optional university and search filters plus the limit/offset window
    ///
    /// # Returns
    /// - `Ok(Vec<Module>)` - Matching modules, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, params: ListModulesParams) -> Result<Vec<Module>, DbErr> {
        let mut query = entity::prelude::Module::find()
            .filter(entity::module::Column::IsActive.eq(true));

        if let Some(university) = params.university {
            query = query.filter(entity::module::Column::University.eq(university));
        }

        if let Some(search) = params.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Expr::cust_with_values(
                        "LOWER(module_code) LIKE ?",
                        [pattern.clone()],
                    ))
                    .add(Expr::cust_with_values(
                        "LOWER(module_name) LIKE ?",
                        [pattern.clone()],
                    ))
                    .add(Expr::cust_with_values(
                        "LOWER(COALESCE(description, '')) LIKE ?",
                        [pattern],
                    )),
            );
        }

        let modules = query
            .order_by_asc(entity::module::Column::ModuleCode)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.db)
            .await?;

        self.with_counts(modules).await
    }

    /// Finds an active module by ID with its dependent counts.
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Module>, DbErr> {
        let Some(module) = self.find_active_entity(id).await? else {
            return Ok(None);
        };

        Ok(self.with_counts(vec![module]).await?.pop())
    }

    /// Checks whether an active module with the given ID exists.
    pub async fn is_active(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_active_entity(id).await?.is_some())
    }

    /// Inserts a new module.
    ///
    /// # Returns
    /// - `Ok(Module)` - Created module with zero counts
    /// - `Err(DbErr)` - Database error, including unique violations on `module_code`
    pub async fn create(&self, params: CreateModuleParams) -> Result<Module, DbErr> {
        let now = Utc::now();

        let entity = entity::module::ActiveModel {
            module_code: ActiveValue::Set(params.module_code),
            module_name: ActiveValue::Set(params.module_name),
            description: ActiveValue::Set(params.description),
            university: ActiveValue::Set(params.university),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Module::from_entity(entity, ModuleCounts::default()))
    }

    /// Applies whitelisted changes to an active module and stamps `updated_at`.
    ///
    /// `Some(None)` on `description` or `university` sets the column to NULL.
    ///
    /// # Returns
    /// - `Ok(Some(Module))` - Updated module with fresh counts
    /// - `Ok(None)` - No active module with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateModuleParams,
    ) -> Result<Option<Module>, DbErr> {
        let Some(entity) = self.find_active_entity(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::module::ActiveModel = entity.into();

        if let Some(module_name) = params.module_name {
            active_model.module_name = ActiveValue::Set(module_name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(university) = params.university {
            active_model.university = ActiveValue::Set(university);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(self.with_counts(vec![updated]).await?.pop())
    }

    /// Marks an active module inactive.
    ///
    /// # Returns
    /// - `Ok(true)` - Module was active and is now inactive
    /// - `Ok(false)` - No active module with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Module::update_many()
            .col_expr(entity::module::Column::IsActive, Expr::value(false))
            .col_expr(entity::module::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::module::Column::Id.eq(id))
            .filter(entity::module::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_active_entity(&self, id: i32) -> Result<Option<entity::module::Model>, DbErr> {
        entity::prelude::Module::find_by_id(id)
            .filter(entity::module::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Attaches dependent counts using one grouped query per dependent table.
    async fn with_counts(
        &self,
        modules: Vec<entity::module::Model>,
    ) -> Result<Vec<Module>, DbErr> {
        if modules.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = modules.iter().map(|m| m.id).collect();

        let topic_counts: HashMap<i32, i64> = entity::prelude::Topic::find()
            .select_only()
            .column(entity::topic::Column::ModuleId)
            .column_as(entity::topic::Column::Id.count(), "count")
            .filter(entity::topic::Column::ModuleId.is_in(ids.clone()))
            .filter(entity::topic::Column::IsActive.eq(true))
            .group_by(entity::topic::Column::ModuleId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let enrollment_counts: HashMap<i32, i64> = entity::prelude::UserModule::find()
            .select_only()
            .column(entity::user_module::Column::ModuleId)
            .column_as(entity::user_module::Column::Id.count(), "count")
            .filter(entity::user_module::Column::ModuleId.is_in(ids.clone()))
            .group_by(entity::user_module::Column::ModuleId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let study_group_counts: HashMap<i32, i64> = entity::prelude::StudyGroup::find()
            .select_only()
            .column(entity::study_group::Column::ModuleId)
            .column_as(entity::study_group::Column::Id.count(), "count")
            .filter(entity::study_group::Column::ModuleId.is_in(ids))
            .filter(entity::study_group::Column::IsActive.eq(true))
            .group_by(entity::study_group::Column::ModuleId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(modules
            .into_iter()
            .map(|module| {
                let counts = ModuleCounts {
                    topic_count: count_of(&topic_counts, module.id),
                    enrollment_count: count_of(&enrollment_counts, module.id),
                    study_group_count: count_of(&study_group_counts, module.id),
                };
                Module::from_entity(module, counts)
            })
            .collect())
    }
}

fn count_of(counts: &HashMap<i32, i64>, id: i32) -> u64 {
    counts.get(&id).copied().unwrap_or(0).max(0) as u64
}
