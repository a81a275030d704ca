//! Topic factory for creating topics beneath a module.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TopicFactory<'a> {
    db: &'a DatabaseConnection,
    module_id: i32,
    topic_name: String,
    description: Option<String>,
    order_sequence: i32,
    is_active: bool,
}

impl<'a> TopicFactory<'a> {
    /// Creates a new TopicFactory for the given module.
    ///
    /// Defaults to an active topic named `"Topic {id}"` at order 0.
    pub fn new(db: &'a DatabaseConnection, module_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            module_id,
            topic_name: format!("Topic {}", id),
            description: None,
            order_sequence: 0,
            is_active: true,
        }
    }

    pub fn topic_name(mut self, name: impl Into<String>) -> Self {
        self.topic_name = name.into();
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

    pub async fn build(self) -> Result<entity::topic::Model, DbErr> {
        entity::topic::ActiveModel {
            module_id: ActiveValue::Set(self.module_id),
            topic_name: ActiveValue::Set(self.topic_name),
            description: ActiveValue::Set(self.description),
            order_sequence: ActiveValue::Set(self.order_sequence),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_topic(
    db: &DatabaseConnection,
    module_id: i32,
) -> Result<entity::topic::Model, DbErr> {
    TopicFactory::new(db, module_id).build().await
}
