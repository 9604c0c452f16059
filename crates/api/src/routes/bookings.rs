//! Route definitions for the booking request lifecycle.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/booking-requests`.
///
/// ```text
/// GET    /                      list_bookings
/// POST   /                      create_booking
/// GET    /{id}                  get_booking
/// PATCH  /{id}/approve          approve_booking
/// PATCH  /{id}/reject           reject_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(booking::list_bookings).post(booking::create_booking),
        )
        .route("/{id}", get(booking::get_booking))
        .route("/{id}/approve", patch(booking::approve_booking))
        .route("/{id}/reject", patch(booking::reject_booking))
}
