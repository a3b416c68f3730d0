use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, ChatUser};
use crate::features::conversations::dtos::{ChooseCodDto, ChooseCourierDto, DialogueReplyDto};
use crate::features::conversations::services::ConversationService;
use crate::shared::types::ApiResponse;

/// Current step of the caller's label dialogue
#[utoipa::path(
    get,
    path = "/api/conversations",
    responses(
        (status = 200, description = "Current dialogue step", body = ApiResponse<DialogueReplyDto>),
        (status = 401, description = "Missing X-User-Id header")
    ),
    tag = "conversations",
    security(
        ("user_id" = [])
    )
)]
pub async fn get_conversation(
    user: ChatUser,
    State(service): State<Arc<ConversationService>>,
) -> Result<Json<ApiResponse<DialogueReplyDto>>> {
    let step = service.current_step(user.id()).await;
    Ok(Json(ApiResponse::success(
        Some(DialogueReplyDto::at(step)),
        None,
        None,
    )))
}

/// Start the shipping label dialogue, restarting any dialogue in progress
#[utoipa::path(
    post,
    path = "/api/conversations",
    responses(
        (status = 200, description = "Dialogue started", body = ApiResponse<DialogueReplyDto>),
        (status = 401, description = "Missing X-User-Id header"),
        (status = 410, description = "No address selected in a live session")
    ),
    tag = "conversations",
    security(
        ("user_id" = [])
    )
)]
pub async fn start_conversation(
    user: ChatUser,
    State(service): State<Arc<ConversationService>>,
) -> Result<Json<ApiResponse<DialogueReplyDto>>> {
    let step = service.start(user.id()).await?;
    Ok(Json(ApiResponse::success(
        Some(DialogueReplyDto::at(step)),
        None,
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/conversations/courier",
    request_body = ChooseCourierDto,
    responses(
        (status = 200, description = "Courier accepted", body = ApiResponse<DialogueReplyDto>),
        (status = 400, description = "Unknown courier"),
        (status = 409, description = "Dialogue is not at the courier step"),
        (status = 410, description = "No dialogue in progress")
    ),
    tag = "conversations",
    security(
        ("user_id" = [])
    )
)]
pub async fn choose_courier(
    user: ChatUser,
    State(service): State<Arc<ConversationService>>,
    AppJson(dto): AppJson<ChooseCourierDto>,
) -> Result<Json<ApiResponse<DialogueReplyDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = service.choose_courier(user.id(), &dto.courier).await?;
    Ok(Json(ApiResponse::success(Some(outcome.into()), None, None)))
}

/// Answer the cash-on-delivery question and generate the label
#[utoipa::path(
    post,
    path = "/api/conversations/cod",
    request_body = ChooseCodDto,
    responses(
        (status = 200, description = "Label generated", body = ApiResponse<DialogueReplyDto>),
        (status = 409, description = "Dialogue is not at the COD step"),
        (status = 410, description = "No dialogue in progress or session ended"),
        (status = 502, description = "Label generation failed")
    ),
    tag = "conversations",
    security(
        ("user_id" = [])
    )
)]
pub async fn choose_cod(
    user: ChatUser,
    State(service): State<Arc<ConversationService>>,
    AppJson(dto): AppJson<ChooseCodDto>,
) -> Result<Json<ApiResponse<DialogueReplyDto>>> {
    let outcome = service.choose_cod(user.id(), dto.cod).await?;
    Ok(Json(ApiResponse::success(
        Some(outcome.into()),
        Some("Resi berhasil dibuat".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/conversations",
    responses(
        (status = 200, description = "Dialogue cancelled"),
        (status = 410, description = "No dialogue in progress")
    ),
    tag = "conversations",
    security(
        ("user_id" = [])
    )
)]
pub async fn cancel_conversation(
    user: ChatUser,
    State(service): State<Arc<ConversationService>>,
) -> Result<Json<ApiResponse<()>>> {
    if !service.cancel(user.id()).await {
        return Err(AppError::SessionExpired(
            "Tidak ada pembuatan resi yang sedang berjalan".to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(
        None,
        Some("Pembuatan resi dibatalkan".to_string()),
        None,
    )))
}
