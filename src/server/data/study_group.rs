//! Study group lookups used by group broadcasts.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct StudyGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active study group by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Group exists and is active
    /// - `Ok(None)` - Group is absent or inactive
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::study_group::Model>, DbErr> {
        entity::prelude::StudyGroup::find_by_id(id)
            .filter(entity::study_group::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Gets the membership row of a user in a group.
    pub async fn find_member(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::study_group_member::Model>, DbErr> {
        entity::prelude::StudyGroupMember::find()
            .filter(entity::study_group_member::Column::GroupId.eq(group_id))
            .filter(entity::study_group_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets the user IDs of every member of a group, ordered by user ID.
    pub async fn member_user_ids(&self, group_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::StudyGroupMember::find()
            .select_only()
            .column(entity::study_group_member::Column::UserId)
            .filter(entity::study_group_member::Column::GroupId.eq(group_id))
            .order_by_asc(entity::study_group_member::Column::UserId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
