use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor_facilities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub doctor_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub facility_id: i32,
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
        belongs_to = "super::facilities::Entity",
        from = "Column::FacilityId",
        to = "super::facilities::Column::Id"
    )]
    Facility,
}

impl Related<super::doctors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::facilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facility.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
