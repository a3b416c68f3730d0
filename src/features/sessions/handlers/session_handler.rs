use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, ChatUser};
use crate::features::addresses::dtos::{AddressDetailDto, AddressPageDto};
use crate::features::sessions::dtos::{SelectAddressDto, ShippingEstimateDto};
use crate::features::sessions::services::{SessionError, SessionStore};
use crate::modules::shipping::ShippingRateProvider;
use crate::shared::pagination::paginate;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

#[derive(Clone)]
pub struct SessionState {
    pub store: Arc<SessionStore>,
    pub shipping: Arc<dyn ShippingRateProvider>,
}

/// Page through the caller's cached search results
#[utoipa::path(
    get,
    path = "/api/sessions/results",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of cached results", body = ApiResponse<AddressPageDto>),
        (status = 401, description = "Missing X-User-Id header"),
        (status = 410, description = "Session ended")
    ),
    tag = "sessions",
    security(
        ("user_id" = [])
    )
)]
pub async fn get_results(
    user: ChatUser,
    State(state): State<SessionState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<AddressPageDto>>> {
    let results = state
        .store
        .get_results(user.id())
        .await
        .ok_or(SessionError::Expired)?;

    let page = AddressPageDto::from(paginate(&results, query.page, query.limit()));
    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta::total(results.len())),
    )))
}

/// Select a record from the cached results by its global number
#[utoipa::path(
    post,
    path = "/api/sessions/selection",
    request_body = SelectAddressDto,
    responses(
        (status = 200, description = "Record selected", body = ApiResponse<AddressDetailDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Number does not address a result"),
        (status = 410, description = "Session ended")
    ),
    tag = "sessions",
    security(
        ("user_id" = [])
    )
)]
pub async fn select_address(
    user: ChatUser,
    State(state): State<SessionState>,
    AppJson(dto): AppJson<SelectAddressDto>,
) -> Result<Json<ApiResponse<AddressDetailDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = state.store.select_result(user.id(), dto.number).await?;
    tracing::debug!(
        "User {} selected #{} ({})",
        user.id(),
        dto.number,
        record.kode_pos
    );

    Ok(Json(ApiResponse::success(
        Some(AddressDetailDto::from(record.as_ref())),
        None,
        None,
    )))
}

/// Detail of the currently selected record
#[utoipa::path(
    get,
    path = "/api/sessions/selection",
    responses(
        (status = 200, description = "Selected record", body = ApiResponse<AddressDetailDto>),
        (status = 410, description = "Session ended or nothing selected")
    ),
    tag = "sessions",
    security(
        ("user_id" = [])
    )
)]
pub async fn get_selection(
    user: ChatUser,
    State(state): State<SessionState>,
) -> Result<Json<ApiResponse<AddressDetailDto>>> {
    let record = state
        .store
        .get_selected_address(user.id())
        .await
        .ok_or(SessionError::Expired)?;

    Ok(Json(ApiResponse::success(
        Some(AddressDetailDto::from(record.as_ref())),
        None,
        None,
    )))
}

/// Shipping rates to the selected record's postal code
///
/// Provider failures are not errors: the response reports `available: false`
/// with the provider's message.
#[utoipa::path(
    get,
    path = "/api/sessions/selection/shipping-estimates",
    responses(
        (status = 200, description = "Shipping estimate", body = ApiResponse<ShippingEstimateDto>),
        (status = 410, description = "Session ended or nothing selected")
    ),
    tag = "sessions",
    security(
        ("user_id" = [])
    )
)]
pub async fn get_shipping_estimates(
    user: ChatUser,
    State(state): State<SessionState>,
) -> Result<Json<ApiResponse<ShippingEstimateDto>>> {
    let record = state
        .store
        .get_selected_address(user.id())
        .await
        .ok_or(SessionError::Expired)?;

    // The store lock is released here; the provider call may be slow
    let estimate = state.shipping.estimate(&record.kode_pos).await;
    let dto = ShippingEstimateDto::new(record.kode_pos.clone(), estimate);

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
