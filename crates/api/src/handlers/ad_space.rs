//! Handlers for ad-space inventory: CRUD, filtered listing, and the
//! guard endpoints that move a space between availability states.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use adbook_core::error::CoreError;
use adbook_core::types::DbId;
use adbook_core::{inventory, listing};
use adbook_db::models::ad_space::{AdSpace, CreateAdSpace, UpdateAdSpace};
use adbook_db::models::status::{AdSpaceCategory, AdSpaceStatus};
use adbook_db::repositories::AdSpaceRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the ad-space listing endpoint.
#[derive(Debug, Deserialize)]
pub struct AdSpaceQuery {
    pub city: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Look up an ad space or fail with 404.
pub(crate) async fn ensure_ad_space_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<AdSpace> {
    AdSpaceRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "AdSpace",
            id,
        })
    })
}

fn parse_category(raw: &str) -> AppResult<AdSpaceCategory> {
    AdSpaceCategory::from_name(raw).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid 'category' parameter '{raw}'. Allowed values: {}",
            AdSpaceCategory::names().join(", ")
        )))
    })
}

/// GET /api/v1/ad-spaces
///
/// List Available ad spaces, optionally filtered by city (substring,
/// case-insensitive) and category, sorted by a whitelisted key.
pub async fn list_ad_spaces(
    State(state): State<AppState>,
    Query(params): Query<AdSpaceQuery>,
) -> AppResult<impl IntoResponse> {
    let category_id = match params.category.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_category(raw)?.id()),
        _ => None,
    };

    let sort_column = listing::resolve_sort_key(params.sort_by.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let sort_dir = listing::resolve_sort_order(params.sort_order.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let spaces = AdSpaceRepo::search_available(
        &state.pool,
        params.city.as_deref(),
        category_id,
        sort_column,
        sort_dir,
    )
    .await?;

    Ok(Json(DataResponse { data: spaces }))
}

/// GET /api/v1/ad-spaces/{id}
pub async fn get_ad_space(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let space = ensure_ad_space_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: space }))
}

/// POST /api/v1/ad-spaces
///
/// Create an ad space. New spaces always start Available.
pub async fn create_ad_space(
    State(state): State<AppState>,
    Json(input): Json<CreateAdSpace>,
) -> AppResult<impl IntoResponse> {
    let category = parse_category(&input.category)?;

    inventory::validate_space_fields(&input.name, &input.city, &input.address)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    inventory::validate_price(input.price_per_day)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let space = AdSpaceRepo::create(
        &state.pool,
        &input.name,
        category.id(),
        &input.city,
        &input.address,
        input.price_per_day,
    )
    .await?;

    tracing::info!(ad_space_id = space.id, name = %space.name, "Ad space created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: space })))
}

/// PATCH /api/v1/ad-spaces/{id}
///
/// Partial update of name, category, city, address, or price.
pub async fn update_ad_space(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdSpace>,
) -> AppResult<impl IntoResponse> {
    let category_id = match input.category.as_deref() {
        Some(raw) => Some(parse_category(raw)?.id()),
        None => None,
    };
    if let Some(price) = input.price_per_day {
        inventory::validate_price(price)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Ad space name is required".to_string(),
            )));
        }
    }

    let space = AdSpaceRepo::update(
        &state.pool,
        id,
        input.name.as_deref(),
        category_id,
        input.city.as_deref(),
        input.address.as_deref(),
        input.price_per_day,
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "AdSpace",
            id,
        })
    })?;

    tracing::info!(ad_space_id = id, "Ad space updated");

    Ok(Json(DataResponse { data: space }))
}

/// DELETE /api/v1/ad-spaces/{id}
///
/// Delete an ad space. Refused with 409 when booking requests still
/// reference it (FK RESTRICT).
pub async fn delete_ad_space(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match AdSpaceRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(ad_space_id = id, "Ad space deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(AppError::Core(CoreError::NotFound {
            entity: "AdSpace",
            id,
        })),
        Err(err) if is_fk_violation(&err) => Err(AppError::Core(CoreError::Conflict(
            "Cannot delete this ad space because it has associated booking requests".to_string(),
        ))),
        Err(err) => Err(err.into()),
    }
}

fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503"))
}

/// PATCH /api/v1/ad-spaces/{id}/available
///
/// Return a space to rotation.
pub async fn mark_available(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_space_status(&state, id, AdSpaceStatus::Available).await
}

/// PATCH /api/v1/ad-spaces/{id}/maintenance
///
/// Take a space out of rotation. Pending bookings are left untouched;
/// they fail the availability check while the space is down.
pub async fn mark_maintenance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_space_status(&state, id, AdSpaceStatus::Maintenance).await
}

/// Guard transition shared by the explicit status endpoints. Unconditional:
/// spaces model no forbidden transitions.
async fn set_space_status(
    state: &AppState,
    id: DbId,
    status: AdSpaceStatus,
) -> AppResult<Json<DataResponse<AdSpace>>> {
    let space = AdSpaceRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "AdSpace",
                id,
            })
        })?;

    tracing::info!(ad_space_id = id, status = status.name(), "Ad space status changed");

    Ok(Json(DataResponse { data: space }))
}
