use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{ListNotificationsParams, NotificationContent},
};
use chrono::{Duration, Utc};
use entity::notification::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_many;
mod delete;
mod list;
mod mark_all_read;
mod mark_read;
mod mark_sent;
mod pending;

fn list_params(user_id: i32) -> ListNotificationsParams {
    ListNotificationsParams {
        user_id,
        unread_only: false,
        notification_type: None,
        limit: 20,
        offset: 0,
    }
}

fn content() -> NotificationContent {
    NotificationContent {
        notification_type: NotificationType::GroupInvite,
        title: "Join us".to_string(),
        message: "You have been invited".to_string(),
        metadata: Some(serde_json::json!({ "group_id": 4 })),
        scheduled_for: None,
    }
}
