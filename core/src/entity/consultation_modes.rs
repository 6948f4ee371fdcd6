use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consultation_modes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doctor_consultation_modes::Entity")]
    DoctorConsultationModes,
}

impl Related<super::doctor_consultation_modes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorConsultationModes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
