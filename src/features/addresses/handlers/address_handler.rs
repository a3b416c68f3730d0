use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::addresses::dtos::{AddressPageDto, SearchAddressesQuery};
use crate::features::addresses::services::DirectoryService;
use crate::shared::constants::DIRECTORY_UNAVAILABLE_MESSAGE;
use crate::shared::pagination::paginate;
use crate::shared::types::{ApiResponse, Meta};

/// Search the postal-code directory without touching the caller's session
///
/// Tokens of the form `field:value` filter on kelurahan, kecamatan, kota,
/// provinsi (substring) or kode_pos (exact); other tokens must all appear
/// somewhere in the record's place names.
#[utoipa::path(
    get,
    path = "/api/addresses",
    params(SearchAddressesQuery),
    responses(
        (status = 200, description = "Page of matching records", body = ApiResponse<AddressPageDto>),
        (status = 400, description = "Missing search text")
    ),
    tag = "addresses"
)]
pub async fn search_addresses(
    State(directory): State<Arc<DirectoryService>>,
    Query(query): Query<SearchAddressesQuery>,
) -> Result<Json<ApiResponse<AddressPageDto>>> {
    let text = query.q.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest(
            "Query parameter 'q' is required".to_string(),
        ));
    }

    let results = directory.search(text);
    let total = results.len();
    let page = AddressPageDto::from(paginate(&results, query.page, query.limit()));

    let message = directory
        .load_error()
        .map(|_| DIRECTORY_UNAVAILABLE_MESSAGE.to_string());

    Ok(Json(ApiResponse::success(
        Some(page),
        message,
        Some(Meta::total(total)),
    )))
}
