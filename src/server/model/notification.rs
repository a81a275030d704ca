//! Notification domain models and parameters.
//!
//! Notifications are per-user inbox rows. A row may be scheduled for later push
//! delivery; delivery workers poll for due rows and stamp `sent_at` once pushed.

use chrono::{DateTime, Utc};
use entity::notification::NotificationType;
use sea_orm::ActiveEnum;
use serde_json::Value;

use crate::{
    model::notification::{
        CreateNotificationDto, GroupNotificationDto, NotificationCountsDto, NotificationDto,
        UnreadByTypeDto,
    },
    server::{error::AppError, model::module::required},
};

pub const DEFAULT_NOTIFICATION_LIMIT: u64 = 20;
pub const MAX_NOTIFICATION_LIMIT: u64 = 100;
pub const DEFAULT_PENDING_LIMIT: u64 = 100;
pub const MAX_PENDING_LIMIT: u64 = 500;

/// Parses the wire name of a notification type.
///
/// # Returns
/// - `Ok(NotificationType)` - One of the six known type names
/// - `Err(AppError::BadRequest)` - Unknown type name
pub fn parse_notification_type(value: &str) -> Result<NotificationType, AppError> {
    NotificationType::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Invalid notification type: {}", value)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub metadata: Option<Value>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Metadata that is not valid JSON is logged and surfaced as `None` so a single
    /// corrupt row does not fail a whole listing.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        let metadata = entity.metadata.as_deref().and_then(|raw| {
            serde_json::from_str::<Value>(raw)
                .map_err(|e| {
                    tracing::warn!(
                        "Unparseable metadata on notification {}: {}",
                        entity.id,
                        e
                    );
                })
                .ok()
        });

        Self {
            id: entity.id,
            user_id: entity.user_id,
            notification_type: entity.notification_type,
            title: entity.title,
            message: entity.message,
            metadata,
            is_read: entity.is_read,
            read_at: entity.read_at,
            scheduled_for: entity.scheduled_for,
            sent_at: entity.sent_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            notification_type: self.notification_type.to_value(),
            title: self.title,
            message: self.message,
            metadata: self.metadata,
            is_read: self.is_read,
            read_at: self.read_at,
            scheduled_for: self.scheduled_for,
            sent_at: self.sent_at,
            created_at: self.created_at,
        }
    }
}

/// Inbox totals for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCounts {
    pub total: u64,
    pub unread: u64,
    pub unread_by_type: UnreadByType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnreadByType {
    pub session_reminder: u64,
    pub group_invite: u64,
    pub progress_update: u64,
    pub partner_match: u64,
    pub message: u64,
    pub system: u64,
}

impl UnreadByType {
    pub fn add(&mut self, notification_type: NotificationType, count: u64) {
        let slot = match notification_type {
            NotificationType::SessionReminder => &mut self.session_reminder,
            NotificationType::GroupInvite => &mut self.group_invite,
            NotificationType::ProgressUpdate => &mut self.progress_update,
            NotificationType::PartnerMatch => &mut self.partner_match,
            NotificationType::Message => &mut self.message,
            NotificationType::System => &mut self.system,
        };
        *slot += count;
    }
}

impl NotificationCounts {
    pub fn into_dto(self) -> NotificationCountsDto {
        let by_type = self.unread_by_type;
        NotificationCountsDto {
            total: self.total,
            unread: self.unread,
            unread_by_type: UnreadByTypeDto {
                session_reminder: by_type.session_reminder,
                group_invite: by_type.group_invite,
                progress_update: by_type.progress_update,
                partner_match: by_type.partner_match,
                message: by_type.message,
                system: by_type.system,
            },
        }
    }
}

/// Filters and window for a user's inbox listing.
#[derive(Debug, Clone)]
pub struct ListNotificationsParams {
    pub user_id: i32,
    pub unread_only: bool,
    pub notification_type: Option<NotificationType>,
    pub limit: u64,
    pub offset: u64,
}

/// Content shared by single and group notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationContent {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub metadata: Option<Value>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl NotificationContent {
    fn validate(
        notification_type: Option<String>,
        title: Option<String>,
        message: Option<String>,
        metadata: Option<Value>,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Result<Self, AppError> {
        let notification_type = match notification_type {
            Some(t) => parse_notification_type(&t)?,
            None => return Err(AppError::BadRequest("type is required".to_string())),
        };

        Ok(Self {
            notification_type,
            title: required(title, "title")?,
            message: required(message, "message")?,
            // A JSON `null` carries no information; store it as absent
            metadata: metadata.filter(|m| !m.is_null()),
            scheduled_for,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub content: NotificationContent,
}

impl CreateNotificationParams {
    pub fn from_dto(dto: CreateNotificationDto) -> Result<Self, AppError> {
        let Some(user_id) = dto.user_id else {
            return Err(AppError::BadRequest("user_id is required".to_string()));
        };

        Ok(Self {
            user_id,
            content: NotificationContent::validate(
                dto.notification_type,
                dto.title,
                dto.message,
                dto.metadata,
                dto.scheduled_for,
            )?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GroupNotificationParams {
    pub group_id: i32,
    /// Caller requesting the broadcast.
    pub sender_id: i32,
    pub content: NotificationContent,
}

impl GroupNotificationParams {
    pub fn from_dto(
        group_id: i32,
        sender_id: i32,
        dto: GroupNotificationDto,
    ) -> Result<Self, AppError> {
        Ok(Self {
            group_id,
            sender_id,
            content: NotificationContent::validate(
                dto.notification_type,
                dto.title,
                dto.message,
                dto.metadata,
                dto.scheduled_for,
            )?,
        })
    }
}
