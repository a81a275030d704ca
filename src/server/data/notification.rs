//! Notification data repository.
//!
//! Handles inbox reads, read-state transitions, single and bulk inserts, and the
//! pending/mark-sent pair used by push delivery workers. Each mutation is a single
//! statement; no transactions or row locks are taken.

use chrono::{DateTime, Utc};
use entity::notification::NotificationType;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{
    ListNotificationsParams, Notification, NotificationContent, NotificationCounts,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's notifications newest first.
    ///
    /// # Arguments
    /// - `params` - Owner, unread/type filters and the limit/offset window
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Matching notifications, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        params: ListNotificationsParams,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(params.user_id));

        if params.unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        if let Some(notification_type) = params.notification_type {
            query = query
                .filter(entity::notification::Column::NotificationType.eq(notification_type));
        }

        let notifications = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.db)
            .await?;

        Ok(notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Aggregates a user's inbox with one `GROUP BY (type, is_read)` query.
    pub async fn counts(&self, user_id: i32) -> Result<NotificationCounts, DbErr> {
        let rows = entity::prelude::Notification::find()
            .select_only()
            .column(entity::notification::Column::NotificationType)
            .column(entity::notification::Column::IsRead)
            .column_as(entity::notification::Column::Id.count(), "count")
            .filter(entity::notification::Column::UserId.eq(user_id))
            .group_by(entity::notification::Column::NotificationType)
            .group_by(entity::notification::Column::IsRead)
            .into_tuple::<(NotificationType, bool, i64)>()
            .all(self.db)
            .await?;

        let mut counts = NotificationCounts::default();
        for (notification_type, is_read, count) in rows {
            let count = count.max(0) as u64;
            counts.total += count;
            if !is_read {
                counts.unread += count;
                counts.unread_by_type.add(notification_type, count);
            }
        }

        Ok(counts)
    }

    /// Marks one of the user's notifications read.
    ///
    /// `read_at` is stamped only on the first transition; an already-read row is
    /// returned unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification in its read state
    /// - `Ok(None)` - No notification with that ID owned by the user
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if entity.is_read {
            return Ok(Some(Notification::from_entity(entity)));
        }

        let mut active_model: entity::notification::ActiveModel = entity.into();
        active_model.is_read = ActiveValue::Set(true);
        active_model.read_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active_model.update(self.db).await?;

        Ok(Some(Notification::from_entity(updated)))
    }

    /// Marks every unread notification of the user read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications transitioned
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .col_expr(entity::notification::Column::ReadAt, Expr::value(Utc::now()))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Permanently deletes one of the user's notifications.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No notification with that ID owned by the user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Inserts a single notification for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        content: NotificationContent,
    ) -> Result<Notification, DbErr> {
        let entity = active_model(user_id, &content, Utc::now())
            .insert(self.db)
            .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Inserts identical content for each recipient with a single multi-row insert.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications inserted; 0 when `user_ids` is empty
    /// - `Err(DbErr)` - Database error during insert, nothing is inserted
    pub async fn create_many(
        &self,
        user_ids: &[i32],
        content: NotificationContent,
    ) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models: Vec<_> = user_ids
            .iter()
            .map(|user_id| active_model(*user_id, &content, now))
            .collect();

        entity::prelude::Notification::insert_many(models)
            .exec_without_returning(self.db)
            .await
    }

    /// Gets notifications due for delivery: scheduled at or before `now` and not yet sent.
    ///
    /// Ordered by `scheduled_for`, oldest first.
    pub async fn pending(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Notification>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .filter(entity::notification::Column::ScheduledFor.lte(now))
            .filter(entity::notification::Column::SentAt.is_null())
            .order_by_asc(entity::notification::Column::ScheduledFor)
            .order_by_asc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Stamps `sent_at` on the given notifications that have not been sent yet.
    ///
    /// Rows already carrying a `sent_at` keep their original timestamp.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications newly marked sent
    pub async fn mark_sent(&self, ids: &[i32], now: DateTime<Utc>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::SentAt, Expr::value(now))
            .filter(entity::notification::Column::Id.is_in(ids.to_vec()))
            .filter(entity::notification::Column::SentAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn active_model(
    user_id: i32,
    content: &NotificationContent,
    now: DateTime<Utc>,
) -> entity::notification::ActiveModel {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        notification_type: ActiveValue::Set(content.notification_type),
        title: ActiveValue::Set(content.title.clone()),
        message: ActiveValue::Set(content.message.clone()),
        metadata: ActiveValue::Set(content.metadata.as_ref().map(|m| m.to_string())),
        is_read: ActiveValue::Set(false),
        read_at: ActiveValue::Set(None),
        scheduled_for: ActiveValue::Set(content.scheduled_for),
        sent_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
}
