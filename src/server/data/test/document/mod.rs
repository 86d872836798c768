use crate::server::{
    data::document::VehicleDocumentRepository, model::document::CreateVehicleDocumentParam,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
