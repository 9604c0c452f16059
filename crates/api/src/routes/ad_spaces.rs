//! Route definitions for ad-space inventory management.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::ad_space;
use crate::state::AppState;

/// Routes mounted at `/ad-spaces`.
///
/// ```text
/// GET    /                      list_ad_spaces
/// POST   /                      create_ad_space
/// GET    /{id}                  get_ad_space
/// PATCH  /{id}                  update_ad_space
/// DELETE /{id}                  delete_ad_space
/// PATCH  /{id}/available        mark_available
/// PATCH  /{id}/maintenance      mark_maintenance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(ad_space::list_ad_spaces).post(ad_space::create_ad_space),
        )
        .route(
            "/{id}",
            get(ad_space::get_ad_space)
                .patch(ad_space::update_ad_space)
                .delete(ad_space::delete_ad_space),
        )
        .route("/{id}/available", patch(ad_space::mark_available))
        .route("/{id}/maintenance", patch(ad_space::mark_maintenance))
}
