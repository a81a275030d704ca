use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub module_code: String,
    pub module_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub university: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::topic::Entity")]
    Topic,
    #[sea_orm(has_many = "super::user_module::Entity")]
    UserModule,
    #[sea_orm(has_many = "super::study_group::Entity")]
    StudyGroup,
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl Related<super::user_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserModule.def()
    }
}

impl Related<super::study_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
