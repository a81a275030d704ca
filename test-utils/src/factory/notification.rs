//! Notification factory for creating inbox rows in tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::notification::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let notification = NotificationFactory::new(&db, user.id)
///     .notification_type(NotificationType::GroupInvite)
///     .scheduled_for(Utc::now() - Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    notification_type: NotificationType,
    title: String,
    message: String,
    metadata: Option<serde_json::Value>,
    is_read: bool,
    scheduled_for: Option<DateTime<Utc>>,
    sent_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - notification_type: `NotificationType::Message`
    /// - title: `"Notification {id}"`
    /// - message: `"Message body {id}"`
    /// - unread, unscheduled, unsent, created now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            notification_type: NotificationType::Message,
            title: format!("Notification {}", id),
            message: format!("Message body {}", id),
            metadata: None,
            is_read: false,
            scheduled_for: None,
            sent_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn notification_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = notification_type;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn scheduled_for(mut self, scheduled_for: DateTime<Utc>) -> Self {
        self.scheduled_for = Some(scheduled_for);
        self
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            notification_type: ActiveValue::Set(self.notification_type),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            metadata: ActiveValue::Set(self.metadata.map(|m| m.to_string())),
            is_read: ActiveValue::Set(self.is_read),
            read_at: ActiveValue::Set(None),
            scheduled_for: ActiveValue::Set(self.scheduled_for),
            sent_at: ActiveValue::Set(self.sent_at),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread, immediate notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
