use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Permissions, Role, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Erika Mustermann".to_string(),
        email: email.to_string(),
        password: "geheim".to_string(),
        role: Role::Employee,
        department: Some("Vertrieb".to_string()),
        building: None,
        permissions: None,
    }
}
