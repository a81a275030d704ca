use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed set of notification categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    #[sea_orm(string_value = "session_reminder")]
    SessionReminder,
    #[sea_orm(string_value = "group_invite")]
    GroupInvite,
    #[sea_orm(string_value = "progress_update")]
    ProgressUpdate,
    #[sea_orm(string_value = "partner_match")]
    PartnerMatch,
    #[sea_orm(string_value = "message")]
    Message,
    #[sea_orm(string_value = "system")]
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Recipient
    pub user_id: i32,
    pub notification_type: NotificationType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// Opaque JSON document stored as text
    #[sea_orm(column_type = "Text", nullable)]
    pub metadata: Option<String>,
    pub is_read: bool,
    pub read_at: Option<DateTimeUtc>,
    pub scheduled_for: Option<DateTimeUtc>,
    pub sent_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
