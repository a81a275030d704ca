//! Module factory for creating catalog modules in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test modules with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let module = ModuleFactory::new(&db)
///     .module_code("COMP1000")
///     .module_name("Computing Basics")
///     .build()
///     .await?;
/// ```
pub struct ModuleFactory<'a> {
    db: &'a DatabaseConnection,
    module_code: String,
    module_name: String,
    description: Option<String>,
    university: Option<String>,
    is_active: bool,
}

impl<'a> ModuleFactory<'a> {
    /// Creates a new ModuleFactory with default values.
    ///
    /// Defaults:
    /// - module_code: `"MOD{id}"`
    /// - module_name: `"Module {id}"`
    /// - description: `None`
    /// - university: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            module_code: format!("MOD{}", id),
            module_name: format!("Module {}", id),
            description: None,
            university: None,
            is_active: true,
        }
    }

    pub fn module_code(mut self, code: impl Into<String>) -> Self {
        self.module_code = code.into();
        self
    }

    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn university(mut self, university: impl Into<String>) -> Self {
        self.university = Some(university.into());
        self
    }

    /// Sets the active flag; `false` produces a soft-deleted module.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::module::Model, DbErr> {
        let now = Utc::now();
        entity::module::ActiveModel {
            module_code: ActiveValue::Set(self.module_code),
            module_name: ActiveValue::Set(self.module_name),
            description: ActiveValue::Set(self.description),
            university: ActiveValue::Set(self.university),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active module with default values.
pub async fn create_module(db: &DatabaseConnection) -> Result<entity::module::Model, DbErr> {
    ModuleFactory::new(db).build().await
}
