//! Chapter data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::module::{Chapter, CreateChapterParams};

pub struct ChapterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active chapters of a topic ordered by `order_sequence` then name.
    pub async fn list_by_topic(&self, topic_id: i32) -> Result<Vec<Chapter>, DbErr> {
        let chapters = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::TopicId.eq(topic_id))
            .filter(entity::chapter::Column::IsActive.eq(true))
            .order_by_asc(entity::chapter::Column::OrderSequence)
            .order_by_asc(entity::chapter::Column::ChapterName)
            .all(self.db)
            .await?;

        Ok(chapters.into_iter().map(Chapter::from_entity).collect())
    }

    pub async fn create(&self, params: CreateChapterParams) -> Result<Chapter, DbErr> {
        let order_sequence = match params.order_sequence {
            Some(sequence) => sequence,
            None => self.next_order_sequence(params.topic_id).await?,
        };

        let entity = entity::chapter::ActiveModel {
            topic_id: ActiveValue::Set(params.topic_id),
            chapter_name: ActiveValue::Set(params.chapter_name),
            summary: ActiveValue::Set(params.summary),
            order_sequence: ActiveValue::Set(order_sequence),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chapter::from_entity(entity))
    }

    async fn next_order_sequence(&self, topic_id: i32) -> Result<i32, DbErr> {
        let max = entity::prelude::Chapter::find()
            .select_only()
            .column_as(entity::chapter::Column::OrderSequence.max(), "max")
            .filter(entity::chapter::Column::TopicId.eq(topic_id))
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(max.map_or(1, |m| m + 1))
    }
}
