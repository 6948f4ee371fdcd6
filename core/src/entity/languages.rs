use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doctor_languages::Entity")]
    DoctorLanguages,
}

impl Related<super::doctor_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorLanguages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
