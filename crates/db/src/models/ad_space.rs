//! Ad-space entity model and DTOs.

use adbook_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// An ad space row from the `ad_spaces` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdSpace {
    pub id: DbId,
    pub name: String,
    pub category_id: StatusId,
    pub city: String,
    pub address: String,
    pub price_per_day: Decimal,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new ad space. New spaces always start Available.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdSpace {
    pub name: String,
    /// Uppercase category wire name (BILLBOARD, TRANSIT, DIGITAL).
    pub category: String,
    pub city: String,
    pub address: String,
    pub price_per_day: Decimal,
}

/// DTO for updating an existing ad space. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdSpace {
    pub name: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub price_per_day: Option<Decimal>,
}
