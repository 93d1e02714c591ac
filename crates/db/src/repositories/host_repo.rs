//! Repository for the `hosts` table (hosts and templates).

use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::host::{CreateHost, Host};
use crate::repositories::PgTx;

/// Column list for hosts queries.
const COLUMNS: &str = "id, name, status, created_at, updated_at";

/// Provides reads and writes for host/template entities.
pub struct HostRepo;

impl HostRepo {
    /// Insert a new host or template, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHost) -> Result<Host, sqlx::Error> {
        let query = format!(
            "INSERT INTO hosts (name, status) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Host>(&query)
            .bind(&input.name)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a host or template by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Host>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hosts WHERE id = $1");
        sqlx::query_as::<_, Host>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Display name of a single entity, read inside the operation's
    /// transaction without permission filtering.
    pub async fn name_by_id(tx: &mut PgTx<'_>, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT name FROM hosts WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.map(|(name,)| name))
    }

    /// Display names for a set of entities, ordered by name. Reads
    /// without permission filtering; used for notices and messages.
    pub async fn names_by_ids(tx: &mut PgTx<'_>, ids: &[DbId]) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM hosts WHERE id = ANY($1) ORDER BY name")
                .bind(ids)
                .fetch_all(&mut **tx)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Names of hosts currently linked to any of the given templates,
    /// ordered by name. Must run before the rows are deleted.
    pub async fn names_by_template_ids(
        tx: &mut PgTx<'_>,
        template_ids: &[DbId],
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT h.name \
             FROM hosts h \
             JOIN host_templates ht ON ht.host_id = h.id \
             WHERE ht.template_id = ANY($1) \
             ORDER BY h.name",
        )
        .bind(template_ids)
        .fetch_all(&mut **tx)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
