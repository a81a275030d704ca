//! Catalog service for modules, topics and chapters.
//!
//! Translates missing or inactive parents into `NotFound` errors and duplicate module
//! codes into `BadRequest` while delegating storage to the catalog repositories.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{chapter::ChapterRepository, module::ModuleRepository, topic::TopicRepository},
    error::AppError,
    model::module::{
        Chapter, CreateChapterParams, CreateModuleParams, CreateTopicParams, ListModulesParams,
        Module, Topic, UpdateModuleParams,
    },
};

/// Service providing business logic for the module catalog.
pub struct ModuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModuleService<'a> {
    /// Creates a new ModuleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ModuleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active modules matching the filters.
    pub async fn list(&self, params: ListModulesParams) -> Result<Vec<Module>, AppError> {
        let repo = ModuleRepository::new(self.db);

        Ok(repo.list(params).await?)
    }

    /// Gets an active module with its counts.
    ///
    /// # Returns
    /// - `Ok(Module)` - Module found
    /// - `Err(AppError::NotFound)` - No active module with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Module, AppError> {
        let repo = ModuleRepository::new(self.db);

        repo.find_active_by_id(id).await?.ok_or_else(module_not_found)
    }

    /// Lists the active topics of an active module.
    pub async fn get_topics(&self, module_id: i32) -> Result<Vec<Topic>, AppError> {
        self.require_active_module(module_id).await?;

        Ok(TopicRepository::new(self.db)
            .list_by_module(module_id)
            .await?)
    }

    /// Lists the active chapters of an active topic.
    pub async fn get_chapters(&self, topic_id: i32) -> Result<Vec<Chapter>, AppError> {
        self.require_active_topic(topic_id).await?;

        Ok(ChapterRepository::new(self.db)
            .list_by_topic(topic_id)
            .await?)
    }

    /// Creates a new module.
    ///
    /// # Returns
    /// - `Ok(Module)` - Created module
    /// - `Err(AppError::BadRequest)` - Another module already uses the code
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateModuleParams) -> Result<Module, AppError> {
        let repo = ModuleRepository::new(self.db);
        let module_code = params.module_code.clone();

        match repo.create(params).await {
            Ok(module) => {
                tracing::debug!("Created module {} ({})", module.id, module.module_code);
                Ok(module)
            }
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!("Rejected duplicate module code {}", module_code);
                Err(AppError::BadRequest(
                    "Module code already exists".to_string(),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Creates a topic under an active module.
    pub async fn create_topic(&self, params: CreateTopicParams) -> Result<Topic, AppError> {
        self.require_active_module(params.module_id).await?;

        Ok(TopicRepository::new(self.db).create(params).await?)
    }

    /// Creates a chapter under an active topic.
    pub async fn create_chapter(&self, params: CreateChapterParams) -> Result<Chapter, AppError> {
        self.require_active_topic(params.topic_id).await?;

        Ok(ChapterRepository::new(self.db).create(params).await?)
    }

    /// Applies whitelisted changes to an active module.
    ///
    /// # Returns
    /// - `Ok(Module)` - Updated module with counts
    /// - `Err(AppError::NotFound)` - No active module with that ID
    pub async fn update(&self, id: i32, params: UpdateModuleParams) -> Result<Module, AppError> {
        let repo = ModuleRepository::new(self.db);

        repo.update(id, params).await?.ok_or_else(module_not_found)
    }

    /// Soft-deletes an active module.
    ///
    /// # Returns
    /// - `Ok(())` - Module is now inactive
    /// - `Err(AppError::NotFound)` - No active module with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ModuleRepository::new(self.db);

        if !repo.soft_delete(id).await? {
            return Err(module_not_found());
        }

        tracing::debug!("Soft-deleted module {}", id);

        Ok(())
    }

    async fn require_active_module(&self, module_id: i32) -> Result<(), AppError> {
        if ModuleRepository::new(self.db).is_active(module_id).await? {
            Ok(())
        } else {
            Err(module_not_found())
        }
    }

    async fn require_active_topic(&self, topic_id: i32) -> Result<(), AppError> {
        if TopicRepository::new(self.db).is_active(topic_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Topic not found".to_string()))
        }
    }
}

fn module_not_found() -> AppError {
    AppError::NotFound("Module not found".to_string())
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
