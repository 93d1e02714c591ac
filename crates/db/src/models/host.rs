//! Host and template entity models.
//!
//! Hosts and templates share the `hosts` table; `status` tells them
//! apart. A template is simply an entity that can act as a linkage
//! source, and may itself be a linkage target.

use hostlink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Classification of a `hosts` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "host_status", rename_all = "lowercase")]
pub enum HostStatus {
    Monitored,
    Unmonitored,
    Template,
}

/// A `hosts` row: a monitored or unmonitored host, or a template.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Host {
    pub id: DbId,
    pub name: String,
    pub status: HostStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a host or template.
#[derive(Debug, Deserialize)]
pub struct CreateHost {
    pub name: String,
    pub status: HostStatus,
}
