use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, Role},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn register_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Erika Mustermann".to_string(),
        email: email.to_string(),
        password: "geheim123".to_string(),
        role: Role::Employee,
        department: Some("Vertrieb".to_string()),
        building: None,
        permissions: None,
    }
}
