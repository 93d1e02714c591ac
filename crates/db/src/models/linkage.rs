//! Linkage relation models.

use hostlink_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A `host_templates` row: the template `template_id` is linked to the
/// host or template `host_id`.
#[derive(Debug, Clone, Copy, Serialize, FromRow)]
pub struct HostTemplateLink {
    pub id: DbId,
    pub host_id: DbId,
    pub template_id: DbId,
}
