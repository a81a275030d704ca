//! Catalog domain models and parameters.
//!
//! Modules own topics, topics own chapters. Every level is soft-deleted through an
//! `is_active` flag, so the models here only ever describe active rows.

use chrono::{DateTime, Utc};

use crate::{
    model::module::{
        ChapterDto, CreateChapterDto, CreateModuleDto, CreateTopicDto, ModuleDto, TopicDto,
        UpdateModuleDto,
    },
    server::error::AppError,
};

/// Default number of modules returned by a listing.
pub const DEFAULT_MODULE_LIMIT: u64 = 20;
/// Upper bound for the module listing `limit`.
pub const MAX_MODULE_LIMIT: u64 = 100;

/// Aggregate counts of rows depending on a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleCounts {
    pub topic_count: u64,
    pub enrollment_count: u64,
    pub study_group_count: u64,
}

/// An active module together with its dependent counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: i32,
    pub module_code: String,
    pub module_name: String,
    pub description: Option<String>,
    pub university: Option<String>,
    pub counts: ModuleCounts,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Module {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::module::Model, counts: ModuleCounts) -> Self {
        Self {
            id: entity.id,
            module_code: entity.module_code,
            module_name: entity.module_name,
            description: entity.description,
            university: entity.university,
            counts,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ModuleDto {
        ModuleDto {
            id: self.id,
            module_code: self.module_code,
            module_name: self.module_name,
            description: self.description,
            university: self.university,
            topic_count: self.counts.topic_count,
            enrollment_count: self.counts.enrollment_count,
            study_group_count: self.counts.study_group_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: i32,
    pub module_id: i32,
    pub topic_name: String,
    pub description: Option<String>,
    pub order_sequence: i32,
    pub chapter_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn from_entity(entity: entity::topic::Model, chapter_count: u64) -> Self {
        Self {
            id: entity.id,
            module_id: entity.module_id,
            topic_name: entity.topic_name,
            description: entity.description,
            order_sequence: entity.order_sequence,
            chapter_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            id: self.id,
            module_id: self.module_id,
            topic_name: self.topic_name,
            description: self.description,
            order_sequence: self.order_sequence,
            chapter_count: self.chapter_count,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: i32,
    pub topic_id: i32,
    pub chapter_name: String,
    pub summary: Option<String>,
    pub order_sequence: i32,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn from_entity(entity: entity::chapter::Model) -> Self {
        Self {
            id: entity.id,
            topic_id: entity.topic_id,
            chapter_name: entity.chapter_name,
            summary: entity.summary,
            order_sequence: entity.order_sequence,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChapterDto {
        ChapterDto {
            id: self.id,
            topic_id: self.topic_id,
            chapter_name: self.chapter_name,
            summary: self.summary,
            order_sequence: self.order_sequence,
            created_at: self.created_at,
        }
    }
}

/// Filters and window for the module listing.
#[derive(Debug, Clone, Default)]
pub struct ListModulesParams {
    /// Exact university match.
    pub university: Option<String>,
    /// Case-insensitive substring over code, name and description.
    pub search: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone)]
pub struct CreateModuleParams {
    pub module_code: String,
    pub module_name: String,
    pub description: Option<String>,
    pub university: Option<String>,
}

impl CreateModuleParams {
    /// Validates the request body, trimming the required fields.
    ///
    /// # Returns
    /// - `Ok(CreateModuleParams)` - Both code and name present and non-blank
    /// - `Err(AppError::BadRequest)` - A required field is missing or blank
    pub fn from_dto(dto: CreateModuleDto) -> Result<Self, AppError> {
        let module_code = required(dto.module_code, "module_code")?;
        let module_name = required(dto.module_name, "module_name")?;

        Ok(Self {
            module_code,
            module_name,
            description: dto.description,
            university: dto.university,
        })
    }
}

/// Whitelisted module changes. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateModuleParams {
    pub module_name: Option<String>,
    /// `Some(None)` clears the column.
    pub description: Option<Option<String>>,
    /// `Some(None)` clears the column.
    pub university: Option<Option<String>>,
}

impl UpdateModuleParams {
    /// Validates an update body.
    ///
    /// # Returns
    /// - `Ok(UpdateModuleParams)` - At least one updatable field present
    /// - `Err(AppError::BadRequest)` - No updatable field, or a blank `module_name`
    pub fn from_dto(dto: UpdateModuleDto) -> Result<Self, AppError> {
        if dto.module_name.is_none() && dto.description.is_none() && dto.university.is_none() {
            return Err(AppError::BadRequest("No valid fields to update".to_string()));
        }

        let module_name = match dto.module_name {
            Some(name) => Some(required(Some(name), "module_name")?),
            None => None,
        };

        Ok(Self {
            module_name,
            description: dto.description,
            university: dto.university,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTopicParams {
    pub module_id: i32,
    pub topic_name: String,
    pub description: Option<String>,
    pub order_sequence: Option<i32>,
}

impl CreateTopicParams {
    pub fn from_dto(module_id: i32, dto: CreateTopicDto) -> Result<Self, AppError> {
        Ok(Self {
            module_id,
            topic_name: required(dto.topic_name, "topic_name")?,
            description: dto.description,
            order_sequence: dto.order_sequence,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateChapterParams {
    pub topic_id: i32,
    pub chapter_name: String,
    pub summary: Option<String>,
    pub order_sequence: Option<i32>,
}

impl CreateChapterParams {
    pub fn from_dto(topic_id: i32, dto: CreateChapterDto) -> Result<Self, AppError> {
        Ok(Self {
            topic_id,
            chapter_name: required(dto.chapter_name, "chapter_name")?,
            summary: dto.summary,
            order_sequence: dto.order_sequence,
        })
    }
}

/// Trims a required text field, rejecting missing or blank values.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}
