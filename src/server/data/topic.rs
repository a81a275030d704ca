//! Topic data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::module::{CreateTopicParams, Topic};

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active topics of a module with their active chapter counts.
    ///
    /// Ordered by `order_sequence`, ties broken by name.
    pub async fn list_by_module(&self, module_id: i32) -> Result<Vec<Topic>, DbErr> {
        let topics = entity::prelude::Topic::find()
            .filter(entity::topic::Column::ModuleId.eq(module_id))
            .filter(entity::topic::Column::IsActive.eq(true))
            .order_by_asc(entity::topic::Column::OrderSequence)
            .order_by_asc(entity::topic::Column::TopicName)
            .all(self.db)
            .await?;

        if topics.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = topics.iter().map(|t| t.id).collect();
        let chapter_counts: HashMap<i32, i64> = entity::prelude::Chapter::find()
            .select_only()
            .column(entity::chapter::Column::TopicId)
            .column_as(entity::chapter::Column::Id.count(), "count")
            .filter(entity::chapter::Column::TopicId.is_in(ids))
            .filter(entity::chapter::Column::IsActive.eq(true))
            .group_by(entity::chapter::Column::TopicId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(topics
            .into_iter()
            .map(|topic| {
                let count = chapter_counts.get(&topic.id).copied().unwrap_or(0).max(0) as u64;
                Topic::from_entity(topic, count)
            })
            .collect())
    }

    /// Checks whether an active topic with the given ID exists.
    pub async fn is_active(&self, id: i32) -> Result<bool, DbErr> {
        let topic = entity::prelude::Topic::find_by_id(id)
            .filter(entity::topic::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(topic.is_some())
    }

    /// Creates a topic, appending it after the module's last topic when no
    /// `order_sequence` is given.
    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, DbErr> {
        let order_sequence = match params.order_sequence {
            Some(sequence) => sequence,
            None => self.next_order_sequence(params.module_id).await?,
        };

        let entity = entity::topic::ActiveModel {
            module_id: ActiveValue::Set(params.module_id),
            topic_name: ActiveValue::Set(params.topic_name),
            description: ActiveValue::Set(params.description),
            order_sequence: ActiveValue::Set(order_sequence),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Topic::from_entity(entity, 0))
    }

    /// One past the highest `order_sequence` in the module, or 1 for the first topic.
    ///
    /// Inactive topics count so re-created topics never reuse a retired position.
    async fn next_order_sequence(&self, module_id: i32) -> Result<i32, DbErr> {
        let max = entity::prelude::Topic::find()
            .select_only()
            .column_as(entity::topic::Column::OrderSequence.max(), "max")
            .filter(entity::topic::Column::ModuleId.eq(module_id))
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(max.map_or(1, |m| m + 1))
    }
}
