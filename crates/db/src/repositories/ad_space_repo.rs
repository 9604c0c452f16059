//! Repository for the `ad_spaces` table.

use adbook_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::ad_space::AdSpace;
use crate::models::status::{AdSpaceStatus, StatusId};

/// Column list for ad_spaces queries.
const COLUMNS: &str = "id, name, category_id, city, address, price_per_day, \
    status_id, created_at, updated_at";

/// Provides CRUD and guard operations for ad spaces.
pub struct AdSpaceRepo;

impl AdSpaceRepo {
    /// Insert a new ad space. New spaces always start Available.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        category_id: StatusId,
        city: &str,
        address: &str,
        price_per_day: Decimal,
    ) -> Result<AdSpace, sqlx::Error> {
        let query = format!(
            "INSERT INTO ad_spaces (name, category_id, city, address, price_per_day, status_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSpace>(&query)
            .bind(name)
            .bind(category_id)
            .bind(city)
            .bind(address)
            .bind(price_per_day)
            .bind(AdSpaceStatus::Available.id())
            .fetch_one(pool)
            .await
    }

    /// Find an ad space by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdSpace>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ad_spaces WHERE id = $1");
        sqlx::query_as::<_, AdSpace>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search Available spaces with optional city and category filters.
    ///
    /// The city filter is a case-insensitive substring match. `sort_column`
    /// and `sort_dir` must come from the whitelist in `adbook_core::listing`;
    /// they are interpolated into the query, not bound.
    pub async fn search_available(
        pool: &PgPool,
        city: Option<&str>,
        category_id: Option<StatusId>,
        sort_column: &str,
        sort_dir: &str,
    ) -> Result<Vec<AdSpace>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ad_spaces
             WHERE status_id = $1
               AND ($2::text IS NULL OR city ILIKE '%' || $2 || '%')
               AND ($3::smallint IS NULL OR category_id = $3)
             ORDER BY {sort_column} {sort_dir}, id ASC"
        );
        sqlx::query_as::<_, AdSpace>(&query)
            .bind(AdSpaceStatus::Available.id())
            .bind(city)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Partial update. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
        category_id: Option<StatusId>,
        city: Option<&str>,
        address: Option<&str>,
        price_per_day: Option<Decimal>,
    ) -> Result<Option<AdSpace>, sqlx::Error> {
        let query = format!(
            "UPDATE ad_spaces SET
                name = COALESCE($2, name),
                category_id = COALESCE($3, category_id),
                city = COALESCE($4, city),
                address = COALESCE($5, address),
                price_per_day = COALESCE($6, price_per_day),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSpace>(&query)
            .bind(id)
            .bind(name)
            .bind(category_id)
            .bind(city)
            .bind(address)
            .bind(price_per_day)
            .fetch_optional(pool)
            .await
    }

    /// Unconditional status transition (the inventory guard's write side).
    ///
    /// Any of the three states may be set from any other. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: AdSpaceStatus,
    ) -> Result<Option<AdSpace>, sqlx::Error> {
        let query = format!(
            "UPDATE ad_spaces SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSpace>(&query)
            .bind(id)
            .bind(status.id())
            .fetch_optional(pool)
            .await
    }

    /// Delete an ad space. Surfaces a foreign-key violation when booking
    /// requests still reference it. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ad_spaces WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
