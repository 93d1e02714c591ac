//! Application (item group) models.

use hostlink_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An `applications` row: a named grouping of items owned by a host or
/// template. Names must stay unique per resulting linkage set.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Application {
    pub id: DbId,
    pub host_id: DbId,
    pub name: String,
}

/// Input for creating an application.
#[derive(Debug, Deserialize)]
pub struct CreateApplication {
    pub host_id: DbId,
    pub name: String,
}

/// Aggregate row from the application-name collision probe.
#[derive(Debug, Clone, FromRow)]
pub struct DuplicateName {
    pub name: String,
    pub occurrences: i64,
}
