//! User domain models and parameters.
//!
//! Users carry a role and an optional set of stored permission flags. When no flags are
//! stored, the effective permissions are derived from the role by [`Permissions::for_role`].

use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, PermissionsDto, RegisterDto, UpdateUserDto, UserDto},
    server::{
        error::validation::ValidationError,
        util::parse::{non_blank, optional_text, require_text},
    },
};

/// Role of a user within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
        }
    }

    /// Parses a stored or submitted role name.
    ///
    /// # Returns
    /// - `Some(Role)` - Known role name
    /// - `None` - Unknown role name
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Admin" => Some(Self::Admin),
            "Employee" => Some(Self::Employee),
            _ => None,
        }
    }

    fn from_input(value: Option<String>) -> Result<Option<Self>, ValidationError> {
        optional_text(value)
            .map(|role| {
                Self::parse(&role).ok_or(ValidationError::UnknownValue {
                    field: "role",
                    value: role,
                })
            })
            .transpose()
    }
}

/// Capability flags checked by the auth guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    pub book_vehicles: bool,
    pub view_statistics: bool,
    pub manage_vehicles: bool,
    pub approve_requests: bool,
}

impl Permissions {
    /// Derives the default permission flags of a role.
    ///
    /// Admins receive every flag, employees may only book vehicles.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                book_vehicles: true,
                view_statistics: true,
                manage_vehicles: true,
                approve_requests: true,
            },
            Role::Employee => Self {
                book_vehicles: true,
                ..Self::default()
            },
        }
    }

    pub fn from_dto(dto: PermissionsDto) -> Self {
        Self {
            book_vehicles: dto.can_book_vehicles,
            view_statistics: dto.can_view_statistics,
            manage_vehicles: dto.can_manage_vehicles,
            approve_requests: dto.can_approve_requests,
        }
    }

    pub fn into_dto(self) -> PermissionsDto {
        PermissionsDto {
            can_book_vehicles: self.book_vehicles,
            can_view_statistics: self.view_statistics,
            can_manage_vehicles: self.manage_vehicles,
            can_approve_requests: self.approve_requests,
        }
    }

    /// Serializes the flags into the JSON column representation.
    pub fn to_json(self) -> serde_json::Value {
        serde_json::json!(self.into_dto())
    }

    /// Reads flags from the JSON column, `None` when the stored value is not a flag object.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value::<PermissionsDto>(value.clone())
            .ok()
            .map(Self::from_dto)
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub role: Role,
    pub email: String,
    /// Bcrypt hash of the password.
    pub password_hash: String,
    pub department: Option<String>,
    pub building: Option<String>,
    /// Explicitly stored flags, overriding the role defaults when present.
    pub stored_permissions: Option<Permissions>,
}

impl User {
    /// Effective permissions: the stored flags when present, otherwise the role defaults.
    pub fn permissions(&self) -> Permissions {
        self.stored_permissions
            .unwrap_or_else(|| Permissions::for_role(self.role))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user to a DTO. The password hash never leaves the server.
    pub fn into_dto(self) -> UserDto {
        let permissions = self.permissions().into_dto();

        UserDto {
            id: self.id,
            name: self.name,
            role: self.role.as_str().to_string(),
            email: self.email,
            department: self.department,
            building: self.building,
            permissions,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(DbErr::Custom)` - Stored role is not a known role name
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown role stored for user {}: {}",
                entity.id, entity.role
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            role,
            email: entity.email,
            password_hash: entity.password_hash,
            department: entity.department,
            building: entity.building,
            stored_permissions: entity.permissions.as_ref().and_then(Permissions::from_json),
        })
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    /// Plain-text password, hashed by the service before storage.
    pub password: String,
    pub role: Role,
    pub department: Option<String>,
    pub building: Option<String>,
    pub permissions: Option<Permissions>,
}

impl CreateUserParam {
    /// Validates an admin-submitted user. The role defaults to `Employee`.
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            email: normalize_email(require_text("email", dto.email)?),
            password: require_password(dto.password)?,
            role: Role::from_input(dto.role)?.unwrap_or(Role::Employee),
            department: optional_text(dto.department),
            building: optional_text(dto.building),
            permissions: dto.permissions.map(Permissions::from_dto),
        })
    }

    /// Validates a self-registration. Registered users are always employees.
    pub fn from_register_dto(dto: RegisterDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            email: normalize_email(require_text("email", dto.email)?),
            password: require_password(dto.password)?,
            role: Role::Employee,
            department: optional_text(dto.department),
            building: None,
            permissions: None,
        })
    }
}

/// Parameters for updating a user. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub building: Option<String>,
    pub permissions: Option<Permissions>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: dto.name.map(|name| non_blank("name", name)).transpose()?,
            email: dto
                .email
                .map(|email| non_blank("email", email).map(normalize_email))
                .transpose()?,
            password: dto.password.map(|p| require_password(Some(p))).transpose()?,
            role: Role::from_input(dto.role)?,
            department: optional_text(dto.department),
            building: optional_text(dto.building),
            permissions: dto.permissions.map(Permissions::from_dto),
        })
    }
}

fn normalize_email(email: String) -> String {
    email.to_lowercase()
}

fn require_password(password: Option<String>) -> Result<String, ValidationError> {
    let password = password.ok_or(ValidationError::MissingField("password"))?;
    if password.is_empty() {
        return Err(ValidationError::EmptyField("password"));
    }
    Ok(password)
}
