use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An active module with aggregate counts of its dependents.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModuleDto {
    pub id: i32,
    pub module_code: String,
    pub module_name: String,
    pub description: Option<String>,
    pub university: Option<String>,
    /// Active topics under the module.
    pub topic_count: u64,
    /// Users enrolled in the module.
    pub enrollment_count: u64,
    /// Active study groups attached to the module.
    pub study_group_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicDto {
    pub id: i32,
    pub module_id: i32,
    pub topic_name: String,
    pub description: Option<String>,
    pub order_sequence: i32,
    /// Active chapters under the topic.
    pub chapter_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChapterDto {
    pub id: i32,
    pub topic_id: i32,
    pub chapter_name: String,
    pub summary: Option<String>,
    pub order_sequence: i32,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /modules`.
///
/// `module_code` and `module_name` are required; they are optional here so a missing
/// field is reported as a 400 with a readable message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateModuleDto {
    pub module_code: Option<String>,
    pub module_name: Option<String>,
    pub description: Option<String>,
    pub university: Option<String>,
}

/// Body of `PUT /modules/{id}`. Only these three fields can change.
///
/// `description` and `university` distinguish an absent key (left unchanged) from an
/// explicit `null` (cleared).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateModuleDto {
    pub module_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub university: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTopicDto {
    pub topic_name: Option<String>,
    pub description: Option<String>,
    /// Appended after the last topic when omitted.
    pub order_sequence: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateChapterDto {
    pub chapter_name: Option<String>,
    pub summary: Option<String>,
    /// Appended after the last chapter when omitted.
    pub order_sequence: Option<i32>,
}

/// Maps a present key to `Some`, keeping `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]` so a missing key stays `None`.
fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
