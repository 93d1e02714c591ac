//! Trigger models.
//!
//! A trigger references items through `trigger_functions` rows and so
//! reaches the hosts/templates owning those items. A row in
//! `trigger_dependencies` means `trigger_id_down` depends on
//! `trigger_id_up`.

use hostlink_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `triggers` row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trigger {
    pub id: DbId,
    pub description: String,
}

/// A `trigger_functions` row tying a trigger to an item.
#[derive(Debug, Clone, Copy, Serialize, FromRow)]
pub struct TriggerFunction {
    pub id: DbId,
    pub trigger_id: DbId,
    pub item_id: DbId,
}

/// Input for creating a trigger with its item references.
#[derive(Debug, Deserialize)]
pub struct CreateTrigger {
    pub description: String,
    pub item_ids: Vec<DbId>,
}
