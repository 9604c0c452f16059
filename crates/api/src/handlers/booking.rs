//! Handlers for the booking request lifecycle: admission (create),
//! listing, approval, and rejection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use adbook_core::booking;
use adbook_core::error::CoreError;
use adbook_core::inventory;
use adbook_core::types::DbId;
use adbook_db::models::booking::{BookingRequest, CreateBookingRequest, NewBooking};
use adbook_db::models::status::BookingStatus;
use adbook_db::repositories::{ApproveError, BookingRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ad_space::ensure_ad_space_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the booking listing endpoint.
#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    pub status: Option<String>,
}

/// Look up a booking request or fail with 404.
async fn ensure_booking_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<BookingRequest> {
    BookingRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "BookingRequest",
            id,
        })
    })
}

/// POST /api/v1/booking-requests
///
/// Admission path for a new booking request: space lookup, availability
/// check, advertiser and date validation, overlap check against approved
/// bookings, cost computation, and insert as Pending.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    let space = ensure_ad_space_exists(&state.pool, input.ad_space_id).await?;

    inventory::ensure_bookable(space.status_id)
        .map_err(|msg| AppError::Core(CoreError::Conflict(msg)))?;

    booking::validate_advertiser(&input.advertiser_name, &input.advertiser_email)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    booking::validate_date_range(state.clock.today(), input.start_date, input.end_date)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let approved: Vec<_> =
        BookingRepo::find_by_space_and_status(&state.pool, space.id, BookingStatus::Approved.id())
            .await?
            .into_iter()
            .map(|b| (b.start_date, b.end_date))
            .collect();
    if booking::overlaps_any(input.start_date, input.end_date, &approved) {
        return Err(AppError::Core(CoreError::Conflict(
            "There are already approved bookings for this period".to_string(),
        )));
    }

    let total_cost = booking::total_cost(space.price_per_day, input.start_date, input.end_date);

    let created = BookingRepo::create(
        &state.pool,
        &NewBooking {
            ad_space_id: space.id,
            advertiser_name: input.advertiser_name,
            advertiser_email: input.advertiser_email,
            start_date: input.start_date,
            end_date: input.end_date,
            total_cost,
        },
    )
    .await?;

    tracing::info!(
        booking_id = created.id,
        ad_space_id = space.id,
        total_cost = %created.total_cost,
        "Booking request created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/booking-requests
///
/// List booking requests, optionally filtered by status.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingQuery>,
) -> AppResult<impl IntoResponse> {
    let status_id = match params.status.as_deref() {
        Some(raw) if !raw.is_empty() => {
            let status = BookingStatus::from_name(raw).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Invalid 'status' parameter '{raw}'. Allowed values: {}",
                    BookingStatus::names().join(", ")
                )))
            })?;
            Some(status.id())
        }
        _ => None,
    };

    let bookings = BookingRepo::list(&state.pool, status_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/booking-requests/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = ensure_booking_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: booking }))
}

/// PATCH /api/v1/booking-requests/{id}/approve
///
/// Approve a pending booking. The overlap check runs again inside the
/// repository transaction because other bookings for the same space may
/// have been approved since this one was created.
pub async fn approve_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_booking_exists(&state.pool, id).await?;

    booking::state_machine::validate_decision(
        existing.status_id,
        booking::STATUS_APPROVED,
        "approved",
    )
    .map_err(|msg| AppError::Core(CoreError::InvalidState(msg)))?;

    let approved = BookingRepo::approve(&state.pool, id)
        .await
        .map_err(|err| match err {
            ApproveError::OverlappingBooking => AppError::Core(CoreError::Conflict(err.to_string())),
            ApproveError::NoLongerPending => AppError::Core(CoreError::InvalidState(err.to_string())),
            ApproveError::Database(db_err) => AppError::Database(db_err),
        })?;

    tracing::info!(
        booking_id = approved.id,
        ad_space_id = approved.ad_space_id,
        "Booking approved; ad space marked booked"
    );

    Ok(Json(DataResponse { data: approved }))
}

/// PATCH /api/v1/booking-requests/{id}/reject
///
/// Reject a pending booking. No space status side effect.
pub async fn reject_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_booking_exists(&state.pool, id).await?;

    booking::state_machine::validate_decision(
        existing.status_id,
        booking::STATUS_REJECTED,
        "rejected",
    )
    .map_err(|msg| AppError::Core(CoreError::InvalidState(msg)))?;

    let rejected = BookingRepo::reject(&state.pool, id).await?.ok_or_else(|| {
        // The guarded UPDATE matched nothing: a concurrent decision won.
        AppError::Core(CoreError::InvalidState(
            "Booking is no longer pending".to_string(),
        ))
    })?;

    tracing::info!(booking_id = rejected.id, "Booking rejected");

    Ok(Json(DataResponse { data: rejected }))
}
