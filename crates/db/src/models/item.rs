//! Monitored item models.

use hostlink_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An `items` row: a collected metric owned by a host or template.
/// `key` must stay unique across everything linked to one target.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: DbId,
    pub host_id: DbId,
    pub key: String,
    pub name: String,
}

/// Input for creating an item.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub host_id: DbId,
    pub key: String,
    pub name: String,
}

/// Aggregate row from the item-key collision probe: an item key carried
/// by more than one entity in a prospective linkage set.
#[derive(Debug, Clone, FromRow)]
pub struct DuplicateKey {
    pub key: String,
    pub occurrences: i64,
}
