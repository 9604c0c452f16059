pub mod ad_spaces;
pub mod bookings;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ad-spaces                        list (filters + sort), create
/// /ad-spaces/{id}                   get, update, delete
/// /ad-spaces/{id}/available         mark available (PATCH)
/// /ad-spaces/{id}/maintenance       mark maintenance (PATCH)
///
/// /booking-requests                 list (?status=), create
/// /booking-requests/{id}            get
/// /booking-requests/{id}/approve    approve (PATCH)
/// /booking-requests/{id}/reject     reject (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ad-spaces", ad_spaces::router())
        .nest("/booking-requests", bookings::router())
}
