use crate::server::{
    error::AppError,
    model::vehicle::{CreateVehicleParam, UpdateVehicleParam, VehicleStatus},
    service::{image::VehicleImageService, vehicle::VehicleService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod export_csv;
mod update;

/// Image lookup without access key, always answering with the placeholder.
fn placeholder_images() -> VehicleImageService {
    VehicleImageService::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
        None,
    )
}

fn create_param(model: &str, license_plate: &str) -> CreateVehicleParam {
    CreateVehicleParam {
        model: model.to_string(),
        license_plate: license_plate.to_string(),
        image: None,
        status: VehicleStatus::Available,
        odometer: 0,
        fuel_level: 100,
        inspection_due: None,
        emissions_test_due: None,
    }
}
