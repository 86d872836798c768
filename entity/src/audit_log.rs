//! Append-only change history.
//!
//! `vehicle_id` carries no relation, entries outlive the vehicle they describe.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub timestamp: DateTimeUtc,
    pub action: String,
    pub actor: Option<String>,
    pub vehicle_id: Option<i32>,
    pub description: Option<String>,
    pub old_values: Option<String>,
    pub new_values: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
