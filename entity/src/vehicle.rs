use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    #[sea_orm(unique)]
    pub license_plate: String,
    pub image: Option<String>,
    pub status: String,
    pub odometer: i32,
    pub fuel_level: i32,
    pub last_service: Option<DateTimeUtc>,
    pub next_service: Option<DateTimeUtc>,
    pub inspection_due: Option<Date>,
    pub emissions_test_due: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
    #[sea_orm(has_many = "super::fuel_log::Entity")]
    FuelLog,
    #[sea_orm(has_many = "super::damage_report::Entity")]
    DamageReport,
    #[sea_orm(has_many = "super::vehicle_document::Entity")]
    VehicleDocument,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl Related<super::fuel_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelLog.def()
    }
}

impl Related<super::damage_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DamageReport.def()
    }
}

impl Related<super::vehicle_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
