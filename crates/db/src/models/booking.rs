//! Booking request entity model and DTOs.

use adbook_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A booking request row from the `booking_requests` table.
///
/// `ad_space_id` is a plain foreign key; callers needing space details
/// fetch them separately through `AdSpaceRepo`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingRequest {
    pub id: DbId,
    pub ad_space_id: DbId,
    pub advertiser_name: String,
    pub advertiser_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_cost: Decimal,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub ad_space_id: DbId,
    pub advertiser_name: String,
    pub advertiser_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Insert payload produced by the admission checks, with the cost already
/// computed. Status is not a field here: new bookings are always Pending.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub ad_space_id: DbId,
    pub advertiser_name: String,
    pub advertiser_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_cost: Decimal,
}
