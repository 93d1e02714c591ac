//! Repository for the `items` table.

use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, DuplicateKey, Item};
use crate::repositories::PgTx;

/// Column list for items queries.
const COLUMNS: &str = "id, host_id, key, name";

pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (host_id, key, name) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(input.host_id)
            .bind(&input.key)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List items owned by a host or template.
    pub async fn list_by_host(pool: &PgPool, host_id: DbId) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE host_id = $1 ORDER BY key");
        sqlx::query_as::<_, Item>(&query)
            .bind(host_id)
            .fetch_all(pool)
            .await
    }

    /// First item key carried by more than one entity in the given set,
    /// lowest key first so failures are deterministic.
    pub async fn find_duplicate_key(
        tx: &mut PgTx<'_>,
        host_ids: &[DbId],
    ) -> Result<Option<DuplicateKey>, sqlx::Error> {
        sqlx::query_as::<_, DuplicateKey>(
            "SELECT key, COUNT(*) AS occurrences \
             FROM items \
             WHERE host_id = ANY($1) \
             GROUP BY key \
             HAVING COUNT(*) > 1 \
             ORDER BY key \
             LIMIT 1",
        )
        .bind(host_ids)
        .fetch_optional(&mut **tx)
        .await
    }
}
