//! Repository for the `host_templates` linkage relation.

use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::linkage::HostTemplateLink;
use crate::repositories::PgTx;

/// Column list for host_templates queries.
const COLUMNS: &str = "id, host_id, template_id";

pub struct LinkageRepo;

impl LinkageRepo {
    /// All linkage rows whose target is in the given set.
    pub async fn edges_for_targets(
        tx: &mut PgTx<'_>,
        target_ids: &[DbId],
    ) -> Result<Vec<HostTemplateLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM host_templates WHERE host_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, HostTemplateLink>(&query)
            .bind(target_ids)
            .fetch_all(&mut **tx)
            .await
    }

    /// Existing `(target, template)` pairs within the cross product of
    /// the given sets; the link operation skips these on insert.
    pub async fn existing_pairs(
        tx: &mut PgTx<'_>,
        target_ids: &[DbId],
        template_ids: &[DbId],
    ) -> Result<Vec<HostTemplateLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM host_templates \
             WHERE host_id = ANY($1) AND template_id = ANY($2)"
        );
        sqlx::query_as::<_, HostTemplateLink>(&query)
            .bind(target_ids)
            .bind(template_ids)
            .fetch_all(&mut **tx)
            .await
    }

    /// Bulk-insert new linkage rows. No-op for an empty slice.
    pub async fn insert_pairs(
        tx: &mut PgTx<'_>,
        pairs: &[(DbId, DbId)],
    ) -> Result<(), sqlx::Error> {
        if pairs.is_empty() {
            return Ok(());
        }
        let host_ids: Vec<DbId> = pairs.iter().map(|&(host_id, _)| host_id).collect();
        let template_ids: Vec<DbId> = pairs.iter().map(|&(_, template_id)| template_id).collect();

        sqlx::query(
            "INSERT INTO host_templates (host_id, template_id) \
             SELECT host_id, template_id \
             FROM UNNEST($1::BIGINT[], $2::BIGINT[]) AS pairs(host_id, template_id)",
        )
        .bind(&host_ids)
        .bind(&template_ids)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Delete rows for the given templates, restricted to the targets
    /// when a target set is supplied. Returns the number of rows removed.
    pub async fn delete(
        tx: &mut PgTx<'_>,
        template_ids: &[DbId],
        target_ids: Option<&[DbId]>,
    ) -> Result<u64, sqlx::Error> {
        let result = match target_ids {
            Some(targets) => {
                sqlx::query(
                    "DELETE FROM host_templates \
                     WHERE template_id = ANY($1) AND host_id = ANY($2)",
                )
                .bind(template_ids)
                .bind(targets)
                .execute(&mut **tx)
                .await?
            }
            None => {
                sqlx::query("DELETE FROM host_templates WHERE template_id = ANY($1)")
                    .bind(template_ids)
                    .execute(&mut **tx)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }

    /// The whole persisted relation restricted to monitored hosts,
    /// unmonitored hosts and templates. Source data for the linkage
    /// graph; entities in any other state do not participate.
    pub async fn all_edges(tx: &mut PgTx<'_>) -> Result<Vec<HostTemplateLink>, sqlx::Error> {
        sqlx::query_as::<_, HostTemplateLink>(
            "SELECT ht.id, ht.host_id, ht.template_id \
             FROM host_templates ht \
             JOIN hosts h ON h.id = ht.host_id \
             WHERE h.status IN ('monitored', 'unmonitored', 'template') \
             ORDER BY ht.id",
        )
        .fetch_all(&mut **tx)
        .await
    }

    /// List linkage rows for one target, in row order.
    pub async fn list_for_host(
        pool: &PgPool,
        host_id: DbId,
    ) -> Result<Vec<HostTemplateLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM host_templates WHERE host_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, HostTemplateLink>(&query)
            .bind(host_id)
            .fetch_all(pool)
            .await
    }

    /// Count all rows in the relation.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM host_templates")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
