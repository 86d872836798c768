//! User factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password every factory user can log in with.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Cost factor for test hashes, far cheaper than the production default.
const TEST_HASH_COST: u32 = 4;

/// Builder for test users.
///
/// Defaults:
/// - name: `"User {id}"`
/// - email: `"user{id}@example.com"`
/// - role: `"Employee"`
/// - password: [`DEFAULT_PASSWORD`]
/// - department, building, permissions: `None`
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    role: String,
    password: String,
    department: Option<String>,
    building: Option<String>,
    permissions: Option<serde_json::Value>,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role: "Employee".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            department: None,
            building: None,
            permissions: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the role, `"Admin"` or `"Employee"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Shorthand for `role("Admin")`.
    pub fn admin(self) -> Self {
        self.role("Admin")
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Stores explicit permission flags instead of deriving them from the role.
    pub fn permissions(mut self, permissions: serde_json::Value) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Hashes the password and inserts the user.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user
    /// - `Err(DbErr)` - Hashing or insert failed
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, TEST_HASH_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            password_hash: ActiveValue::Set(password_hash),
            department: ActiveValue::Set(self.department),
            building: ActiveValue::Set(self.building),
            permissions: ActiveValue::Set(self.permissions),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an employee belonging to `department`.
pub async fn create_user_in_department(
    db: &DatabaseConnection,
    department: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).department(department).build().await
}
