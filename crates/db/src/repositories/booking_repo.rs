//! Repository for the `booking_requests` table, including the atomic
//! approve path that re-checks overlap under a per-space row lock.

use adbook_core::booking;
use adbook_core::types::DbId;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::booking::{BookingRequest, NewBooking};
use crate::models::status::{AdSpaceStatus, BookingStatus, StatusId};

/// Column list for booking_requests queries.
const COLUMNS: &str = "id, ad_space_id, advertiser_name, advertiser_email, \
    start_date, end_date, total_cost, status_id, created_at, updated_at";

/// Failure modes of the atomic approve path.
#[derive(Debug, thiserror::Error)]
pub enum ApproveError {
    /// Another approved booking overlaps the requested period.
    #[error("Cannot approve booking: there are already approved bookings for this period")]
    OverlappingBooking,

    /// The booking left the Pending state between the caller's read and
    /// the locked re-read (a concurrent decision won the race).
    #[error("Booking is no longer pending")]
    NoLongerPending,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides CRUD and lifecycle operations for booking requests.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking request in Pending state.
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<BookingRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO booking_requests
                (ad_space_id, advertiser_name, advertiser_email, start_date, end_date,
                 total_cost, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(input.ad_space_id)
            .bind(&input.advertiser_name)
            .bind(&input.advertiser_email)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.total_cost)
            .bind(BookingStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// Find a booking request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookingRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM booking_requests WHERE id = $1");
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List booking requests, optionally filtered by status, newest first.
    pub async fn list(
        pool: &PgPool,
        status_id: Option<StatusId>,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM booking_requests
             WHERE ($1::smallint IS NULL OR status_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    /// All booking requests for a space in a given status, oldest first.
    ///
    /// The admission overlap check reads approved bookings through this;
    /// the approve path re-reads them itself under the space row lock.
    pub async fn find_by_space_and_status(
        pool: &PgPool,
        ad_space_id: DbId,
        status_id: StatusId,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM booking_requests
             WHERE ad_space_id = $1 AND status_id = $2
             ORDER BY start_date ASC, id ASC"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(ad_space_id)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    /// Atomically approve a pending booking and mark its space Booked.
    ///
    /// The whole read-check-write sequence runs in one transaction:
    /// 1. Lock the booking row (`FOR UPDATE`) and require it is still
    ///    Pending.
    /// 2. Lock the ad-space row, serializing concurrent approvals for the
    ///    same space.
    /// 3. Re-run the overlap check against the currently approved bookings;
    ///    approvals committed since this booking was created are seen here.
    /// 4. Flip the booking to Approved and the space to Booked.
    ///
    /// Either both rows advance or neither does; any early return rolls
    /// the transaction back.
    pub async fn approve(pool: &PgPool, booking_id: DbId) -> Result<BookingRequest, ApproveError> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM booking_requests WHERE id = $1 FOR UPDATE");
        let booking = sqlx::query_as::<_, BookingRequest>(&select)
            .bind(booking_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(ApproveError::Database(sqlx::Error::RowNotFound))?;

        if booking.status_id != BookingStatus::Pending.id() {
            return Err(ApproveError::NoLongerPending);
        }

        sqlx::query("SELECT id FROM ad_spaces WHERE id = $1 FOR UPDATE")
            .bind(booking.ad_space_id)
            .execute(&mut *tx)
            .await?;

        let approved_ranges: Vec<(NaiveDate, NaiveDate)> = sqlx::query_as(
            "SELECT start_date, end_date FROM booking_requests
             WHERE ad_space_id = $1 AND status_id = $2",
        )
        .bind(booking.ad_space_id)
        .bind(BookingStatus::Approved.id())
        .fetch_all(&mut *tx)
        .await?;

        if booking::overlaps_any(booking.start_date, booking.end_date, &approved_ranges) {
            return Err(ApproveError::OverlappingBooking);
        }

        let update = format!(
            "UPDATE booking_requests SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let approved = sqlx::query_as::<_, BookingRequest>(&update)
            .bind(booking_id)
            .bind(BookingStatus::Approved.id())
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE ad_spaces SET status_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(booking.ad_space_id)
            .bind(AdSpaceStatus::Booked.id())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(approved)
    }

    /// Mark a pending booking Rejected. The UPDATE is guarded on the
    /// Pending status so a concurrent decision cannot double-fire; returns
    /// `None` when no pending row matched.
    pub async fn reject(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<BookingRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE booking_requests SET status_id = $2, updated_at = NOW()
             WHERE id = $1 AND status_id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(booking_id)
            .bind(BookingStatus::Rejected.id())
            .bind(BookingStatus::Pending.id())
            .fetch_optional(pool)
            .await
    }
}
