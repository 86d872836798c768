use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, Role, UpdateUserParam},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
