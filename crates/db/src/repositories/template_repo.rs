//! Repository for template-specific reads: linked-template lookups and
//! the read-permission check backing [`crate::access::PgTemplateAccess`].

use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::PgTx;

pub struct TemplateRepo;

impl TemplateRepo {
    /// IDs of templates already linked to the given target, in linkage
    /// row order.
    pub async fn linked_template_ids(
        tx: &mut PgTx<'_>,
        target_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT template_id FROM host_templates WHERE host_id = $1 ORDER BY id",
        )
        .bind(target_id)
        .fetch_all(&mut **tx)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Whether every given template exists and the user holds a read
    /// grant for it. One missing grant (or a non-template ID) fails the
    /// whole set.
    pub async fn is_readable(
        pool: &PgPool,
        user_id: DbId,
        template_ids: &[DbId],
    ) -> Result<bool, sqlx::Error> {
        if template_ids.is_empty() {
            return Ok(true);
        }
        let (readable,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT h.id) \
             FROM hosts h \
             JOIN template_rights r ON r.template_id = h.id \
             WHERE r.user_id = $1 \
               AND h.status = 'template' \
               AND h.id = ANY($2)",
        )
        .bind(user_id)
        .bind(template_ids)
        .fetch_one(pool)
        .await?;

        let distinct_requested = {
            let mut ids = template_ids.to_vec();
            ids.sort_unstable();
            ids.dedup();
            ids.len() as i64
        };
        Ok(readable == distinct_requested)
    }

    /// Grant a user read access to a template.
    pub async fn grant_read(
        pool: &PgPool,
        user_id: DbId,
        template_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO template_rights (user_id, template_id) VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_template_rights_pair DO NOTHING",
        )
        .bind(user_id)
        .bind(template_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
