//! Notification service for inbox operations, broadcasts and delivery polling.
//!
//! Pending and mark-sent give at-least-once delivery: two workers polling between
//! each other's pending read and mark-sent call may both push the same row. Mark-sent
//! never overwrites an existing `sent_at`, so the first stamp wins.

use chrono::Utc;
use entity::study_group_member::GroupRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        notification::NotificationRepository, study_group::StudyGroupRepository,
        user::UserRepository,
    },
    error::AppError,
    model::notification::{
        CreateNotificationParams, GroupNotificationParams, ListNotificationsParams,
        Notification, NotificationCounts,
    },
};

/// Service providing business logic for notifications.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's notifications newest first.
    pub async fn list(
        &self,
        params: ListNotificationsParams,
    ) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db).list(params).await?)
    }

    /// Gets total, unread and per-type unread counts for the caller.
    pub async fn counts(&self, user_id: i32) -> Result<NotificationCounts, AppError> {
        Ok(NotificationRepository::new(self.db).counts(user_id).await?)
    }

    /// Marks one of the caller's notifications read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Notification in its read state
    /// - `Err(AppError::NotFound)` - Absent or owned by another user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            .ok_or_else(notification_not_found)
    }

    /// Marks all of the caller's unread notifications read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications transitioned
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let updated = NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?;

        tracing::debug!("Marked {} notifications read for user {}", updated, user_id);

        Ok(updated)
    }

    /// Permanently deletes one of the caller's notifications.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db)
            .delete(id, user_id)
            .await?
        {
            return Err(notification_not_found());
        }

        Ok(())
    }

    /// Creates a notification for an existing, active recipient.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Created notification
    /// - `Err(AppError::NotFound)` - Recipient does not exist
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        if !UserRepository::new(self.db)
            .active_exists(params.user_id)
            .await?
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let notification = NotificationRepository::new(self.db)
            .create(params.user_id, params.content)
            .await?;

        tracing::debug!(
            "Created notification {} for user {}",
            notification.id,
            notification.user_id
        );

        Ok(notification)
    }

    /// Sends identical content to every member of a study group.
    ///
    /// Only the group's creator or a member holding the group `admin` role may broadcast.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications created, one per member
    /// - `Err(AppError::NotFound)` - Group is absent or inactive
    /// - `Err(AppError::Forbidden)` - Sender is neither creator nor group admin
    pub async fn notify_group(&self, params: GroupNotificationParams) -> Result<u64, AppError> {
        let group_repo = StudyGroupRepository::new(self.db);

        let Some(group) = group_repo.find_active_by_id(params.group_id).await? else {
            return Err(AppError::NotFound("Study group not found".to_string()));
        };

        if group.creator_id != params.sender_id {
            let membership = group_repo
                .find_member(group.id, params.sender_id)
                .await?;

            let is_group_admin = membership.is_some_and(|m| m.role == GroupRole::Admin);
            if !is_group_admin {
                tracing::warn!(
                    "User {} attempted to notify study group {} without admin rights",
                    params.sender_id,
                    group.id
                );
                return Err(AppError::Forbidden(
                    "Only group admins can send notifications".to_string(),
                ));
            }
        }

        let member_ids = group_repo.member_user_ids(group.id).await?;
        let notified = NotificationRepository::new(self.db)
            .create_many(&member_ids, params.content)
            .await?;

        tracing::debug!(
            "Study group {} broadcast fanned out to {} members",
            group.id,
            notified
        );

        Ok(notified)
    }

    /// Gets notifications whose scheduled time has passed and which are not yet sent.
    pub async fn pending(&self, limit: u64) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .pending(Utc::now(), limit)
            .await?)
    }

    /// Stamps `sent_at` on the given notifications.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications newly marked sent
    /// - `Err(AppError::BadRequest)` - `ids` is empty
    pub async fn mark_sent(&self, ids: &[i32]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "notification_ids must be a non-empty array".to_string(),
            ));
        }

        let updated = NotificationRepository::new(self.db)
            .mark_sent(ids, Utc::now())
            .await?;

        tracing::debug!("Marked {} of {} notifications sent", updated, ids.len());

        Ok(updated)
    }
}

fn notification_not_found() -> AppError {
    AppError::NotFound("Notification not found".to_string())
}
