//! Vehicle document data repository for database operations.
//!
//! Only the metadata lives in the database; file contents are stored on disk by the
//! document service.

use crate::server::model::document::{CreateVehicleDocumentParam, VehicleDocument};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct VehicleDocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleDocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the documents of a vehicle, most recently uploaded first.
    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<VehicleDocument>, DbErr> {
        let entities = entity::prelude::VehicleDocument::find()
            .filter(entity::vehicle_document::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(entity::vehicle_document::Column::UploadDate)
            .order_by_desc(entity::vehicle_document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(VehicleDocument::from_entity)
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleDocument>, DbErr> {
        let entity = entity::prelude::VehicleDocument::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(VehicleDocument::from_entity))
    }

    pub async fn create(
        &self,
        param: CreateVehicleDocumentParam,
    ) -> Result<VehicleDocument, DbErr> {
        let entity = entity::vehicle_document::ActiveModel {
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            name: ActiveValue::Set(param.name),
            file_path: ActiveValue::Set(param.file_path),
            upload_date: ActiveValue::Set(param.upload_date),
            document_type: ActiveValue::Set(param.document_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(VehicleDocument::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::VehicleDocument::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
