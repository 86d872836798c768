use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository,
    error::{internal::InternalError, AppError},
    model::vehicle::{CreateVehicleParam, UpdateVehicleParam, Vehicle},
    service::image::VehicleImageService,
};

/// Column order of the CSV export.
const CSV_HEADER: [&str; 5] = ["id", "model", "license_plate", "image", "status"];

/// Loads a vehicle or fails with NotFound.
pub async fn require_vehicle(db: &DatabaseConnection, id: i32) -> Result<Vehicle, AppError> {
    VehicleRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
}

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
    images: &'a VehicleImageService,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a VehicleImageService) -> Self {
        Self { db, images }
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(VehicleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        require_vehicle(self.db, id).await
    }

    /// Creates a vehicle, looking up an image for the model unless one is given
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(AppError::Conflict)` - Another vehicle already has the license plate
    pub async fn create(&self, mut param: CreateVehicleParam) -> Result<Vehicle, AppError> {
        self.ensure_plate_available(&param.license_plate, None).await?;

        if param.image.is_none() {
            param.image = Some(self.images.resolve(&param.model).await);
        }

        let vehicle = VehicleRepository::new(self.db)
            .create(param, chrono::Utc::now())
            .await?;

        tracing::info!("Created vehicle {} ({})", vehicle.id, vehicle.license_plate);

        Ok(vehicle)
    }

    /// Updates a vehicle
    ///
    /// A changed model gets a new image unless the request sets one explicitly.
    pub async fn update(
        &self,
        id: i32,
        mut param: UpdateVehicleParam,
    ) -> Result<Vehicle, AppError> {
        let existing = self.get_by_id(id).await?;

        if let Some(license_plate) = &param.license_plate {
            self.ensure_plate_available(license_plate, Some(id)).await?;
        }

        if param.image.is_none() {
            if let Some(model) = param.model.as_deref().filter(|m| *m != existing.model) {
                param.image = Some(self.images.resolve(model).await);
            }
        }

        Ok(VehicleRepository::new(self.db).update(id, param).await?)
    }

    /// Deletes a vehicle that nothing references anymore
    ///
    /// # Returns
    /// - `Ok(())` - Vehicle deleted
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    /// - `Err(AppError::Conflict)` - Bookings, logbook entries or documents still reference it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VehicleRepository::new(self.db);

        self.get_by_id(id).await?;

        if repo.has_dependents(id).await? {
            return Err(AppError::Conflict(format!(
                "Vehicle {} still has bookings, logbook entries or documents",
                id
            )));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted vehicle {}", id);

        Ok(())
    }

    async fn ensure_plate_available(
        &self,
        license_plate: &str,
        except_vehicle: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = VehicleRepository::new(self.db)
            .find_by_license_plate(license_plate)
            .await?;

        match existing {
            Some(vehicle) if Some(vehicle.id) != except_vehicle => Err(AppError::Conflict(
                format!("License plate {} is already registered", license_plate),
            )),
            _ => Ok(()),
        }
    }

    /// Renders all vehicles as CSV with a header row
    pub async fn export_csv(&self) -> Result<String, AppError> {
        let vehicles = self.get_all().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER).map_err(InternalError::from)?;

        for vehicle in vehicles {
            writer
                .write_record([
                    vehicle.id.to_string(),
                    vehicle.model,
                    vehicle.license_plate,
                    vehicle.image.unwrap_or_default(),
                    vehicle.status.as_str().to_string(),
                ])
                .map_err(InternalError::from)?;
        }

        let buffer = writer
            .into_inner()
            .map_err(|e| InternalError::CsvBuffer(e.to_string()))?;

        Ok(String::from_utf8(buffer).map_err(|e| InternalError::CsvBuffer(e.to_string()))?)
    }
}
