//! Repository for the `applications` table.

use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{Application, CreateApplication, DuplicateName};
use crate::repositories::PgTx;

/// Column list for applications queries.
const COLUMNS: &str = "id, host_id, name";

pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (host_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.host_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List applications owned by a host or template.
    pub async fn list_by_host(
        pool: &PgPool,
        host_id: DbId,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE host_id = $1 ORDER BY name");
        sqlx::query_as::<_, Application>(&query)
            .bind(host_id)
            .fetch_all(pool)
            .await
    }

    /// First application name carried by more than one entity in the
    /// given set, lowest name first.
    pub async fn find_duplicate_name(
        tx: &mut PgTx<'_>,
        host_ids: &[DbId],
    ) -> Result<Option<DuplicateName>, sqlx::Error> {
        sqlx::query_as::<_, DuplicateName>(
            "SELECT name, COUNT(*) AS occurrences \
             FROM applications \
             WHERE host_id = ANY($1) \
             GROUP BY name \
             HAVING COUNT(*) > 1 \
             ORDER BY name \
             LIMIT 1",
        )
        .bind(host_ids)
        .fetch_optional(&mut **tx)
        .await
    }
}
