use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor_consultation_modes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub doctor_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mode_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctors::Entity",
        from = "Column::DoctorId",
        to = "super::doctors::Column::Id"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::consultation_modes::Entity",
        from = "Column::ModeId",
        to = "super::consultation_modes::Column::Id"
    )]
    ConsultationMode,
}

impl Related<super::doctors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::consultation_modes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsultationMode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
