use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsDto {
    pub can_book_vehicles: bool,
    pub can_view_statistics: bool,
    pub can_manage_vehicles: bool,
    pub can_approve_requests: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub email: String,
    pub department: Option<String>,
    pub building: Option<String>,
    pub permissions: PermissionsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// "Admin" or "Employee", defaults to "Employee".
    pub role: Option<String>,
    pub department: Option<String>,
    pub building: Option<String>,
    pub permissions: Option<PermissionsDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub building: Option<String>,
    pub permissions: Option<PermissionsDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct RegisterDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub department: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
