use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    /// One of `session_reminder`, `group_invite`, `progress_update`, `partner_match`,
    /// `message` or `system`.
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub message: String,
    /// Free-form JSON attached by the sender. `null` when absent or unreadable.
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Unread tallies per notification type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UnreadByTypeDto {
    pub session_reminder: u64,
    pub group_invite: u64,
    pub progress_update: u64,
    pub partner_match: u64,
    pub message: u64,
    pub system: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationCountsDto {
    pub total: u64,
    pub unread: u64,
    pub unread_by_type: UnreadByTypeDto,
}

/// Body of `POST /notifications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNotificationDto {
    pub user_id: Option<i32>,
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    /// Delivery time; immediate when omitted.
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Body of `POST /notifications/group/{groupId}/notify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GroupNotificationDto {
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Body of `PUT /notifications/mark-sent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MarkSentDto {
    pub notification_ids: Option<Vec<i32>>,
}
