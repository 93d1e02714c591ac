//! Repository for triggers, their item functions, and dependencies.

use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::trigger::{CreateTrigger, Trigger};
use crate::repositories::PgTx;

pub struct TriggerRepo;

impl TriggerRepo {
    /// Insert a trigger together with its item functions, in one
    /// transaction.
    pub async fn create(pool: &PgPool, input: &CreateTrigger) -> Result<Trigger, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let trigger: Trigger = sqlx::query_as(
            "INSERT INTO triggers (description) VALUES ($1) RETURNING id, description",
        )
        .bind(&input.description)
        .fetch_one(&mut *tx)
        .await?;

        for &item_id in &input.item_ids {
            sqlx::query("INSERT INTO trigger_functions (trigger_id, item_id) VALUES ($1, $2)")
                .bind(trigger.id)
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(trigger)
    }

    /// Record that `down_id` depends on `up_id`.
    pub async fn add_dependency(
        pool: &PgPool,
        down_id: DbId,
        up_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO trigger_dependencies (trigger_id_down, trigger_id_up) VALUES ($1, $2)",
        )
        .bind(down_id)
        .bind(up_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// IDs of triggers whose functions reference items owned by the
    /// given host or template.
    pub async fn trigger_ids_for_host(
        tx: &mut PgTx<'_>,
        host_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT DISTINCT f.trigger_id \
             FROM trigger_functions f \
             JOIN items i ON i.id = f.item_id \
             WHERE i.host_id = $1 \
             ORDER BY f.trigger_id",
        )
        .bind(host_id)
        .fetch_all(&mut **tx)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Name of a template owning an upstream trigger that one of the
    /// given triggers depends on, where that template is outside the
    /// allowed set. `None` when every dependency stays inside the set.
    pub async fn find_dependency_outside(
        tx: &mut PgTx<'_>,
        trigger_ids: &[DbId],
        allowed_host_ids: &[DbId],
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT DISTINCT h.name \
             FROM trigger_dependencies td \
             JOIN trigger_functions f ON f.trigger_id = td.trigger_id_up \
             JOIN items i ON i.id = f.item_id \
             JOIN hosts h ON h.id = i.host_id \
             WHERE td.trigger_id_down = ANY($1) \
               AND NOT (h.id = ANY($2)) \
               AND h.status = 'template' \
             LIMIT 1",
        )
        .bind(trigger_ids)
        .bind(allowed_host_ids)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(row.map(|(name,)| name))
    }

    /// Name of a template that owns items referenced by a trigger which
    /// also spans items of the requested templates, while the template
    /// itself is linked to none of the targets. Evaluated against the
    /// provisionally linked state inside the operation's transaction.
    pub async fn find_unlinked_referenced_template(
        tx: &mut PgTx<'_>,
        target_ids: &[DbId],
        template_ids: &[DbId],
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT DISTINCT h.name \
             FROM trigger_functions f \
             JOIN items i ON i.id = f.item_id \
             JOIN triggers t ON t.id = f.trigger_id \
             JOIN hosts h ON h.id = i.host_id \
             WHERE h.status = 'template' \
               AND NOT EXISTS ( \
                   SELECT 1 FROM host_templates ht \
                   WHERE ht.template_id = i.host_id \
                     AND ht.host_id = ANY($1)) \
               AND EXISTS ( \
                   SELECT 1 FROM trigger_functions ff \
                   JOIN items ii ON ii.id = ff.item_id \
                   WHERE ff.trigger_id = t.id \
                     AND ii.host_id = ANY($2)) \
             LIMIT 1",
        )
        .bind(target_ids)
        .bind(template_ids)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(row.map(|(name,)| name))
    }
}
