//! Chapter factory for creating chapters beneath a topic.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ChapterFactory<'a> {
    db: &'a DatabaseConnection,
    topic_id: i32,
    chapter_name: String,
    summary: Option<String>,
    order_sequence: i32,
    is_active: bool,
}

impl<'a> ChapterFactory<'a> {
    /// Creates a new ChapterFactory for the given topic.
    ///
    /// Defaults to an active chapter named `"Chapter {id}"` at order 0.
    pub fn new(db: &'a DatabaseConnection, topic_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            topic_id,
            chapter_name: format!("Chapter {}", id),
            summary: None,
            order_sequence: 0,
            is_active: true,
        }
    }

    pub fn chapter_name(mut self, name: impl Into<String>) -> Self {
        self.chapter_name = name.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn order_sequence(mut self, order: i32) -> Self {
        self.order_sequence = order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::chapter::Model, DbErr> {
        entity::chapter::ActiveModel {
            topic_id: ActiveValue::Set(self.topic_id),
            chapter_name: ActiveValue::Set(self.chapter_name),
            summary: ActiveValue::Set(self.summary),
            order_sequence: ActiveValue::Set(self.order_sequence),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_chapter(
    db: &DatabaseConnection,
    topic_id: i32,
) -> Result<entity::chapter::Model, DbErr> {
    ChapterFactory::new(db, topic_id).build().await
}
