use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub experience: i32,
    pub qualifications: String,
    pub location: String,
    pub fees: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    pub recommendations: Option<i32>,
    pub profile_image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doctor_consultation_modes::Entity")]
    DoctorConsultationModes,
    #[sea_orm(has_many = "super::doctor_languages::Entity")]
    DoctorLanguages,
    #[sea_orm(has_many = "super::doctor_facilities::Entity")]
    DoctorFacilities,
}

impl Related<super::doctor_consultation_modes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorConsultationModes.def()
    }
}

impl Related<super::doctor_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorLanguages.def()
    }
}

impl Related<super::doctor_facilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorFacilities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
