//! Read-permission collaborator for templates.

use async_trait::async_trait;
use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::TemplateRepo;

/// Permission service consumed by the link operation.
///
/// The linkage services only ever ask one question: may the caller read
/// every requested template? Everything else about authorization stays
/// behind this seam.
#[async_trait]
pub trait TemplateAccess: Send + Sync {
    /// Whether every given template exists and is readable.
    async fn is_readable(&self, template_ids: &[DbId]) -> Result<bool, sqlx::Error>;
}

/// Grants-table backed implementation: a template is readable when a
/// `template_rights` row exists for the user.
pub struct PgTemplateAccess {
    pool: PgPool,
    user_id: DbId,
}

impl PgTemplateAccess {
    pub fn new(pool: PgPool, user_id: DbId) -> Self {
        Self { pool, user_id }
    }
}

#[async_trait]
impl TemplateAccess for PgTemplateAccess {
    async fn is_readable(&self, template_ids: &[DbId]) -> Result<bool, sqlx::Error> {
        TemplateRepo::is_readable(&self.pool, self.user_id, template_ids).await
    }
}

/// Unrestricted access, for internal callers that already authorized
/// the operation upstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

#[async_trait]
impl TemplateAccess for AllowAll {
    async fn is_readable(&self, _template_ids: &[DbId]) -> Result<bool, sqlx::Error> {
        Ok(true)
    }
}
