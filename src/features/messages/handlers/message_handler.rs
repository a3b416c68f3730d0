use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, ChatUser};
use crate::features::messages::dtos::{MessageReplyDto, SendMessageDto};
use crate::features::messages::services::MessageService;
use crate::shared::types::{ApiResponse, Meta};

/// Handle an inbound chat message
///
/// While a label dialogue is in progress the message answers the current
/// step. Otherwise it is searched and the results replace the caller's
/// cached session.
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message handled", body = ApiResponse<MessageReplyDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing X-User-Id header"),
        (status = 410, description = "Session ended"),
        (status = 502, description = "Label generation failed")
    ),
    tag = "messages",
    security(
        ("user_id" = [])
    )
)]
pub async fn send_message(
    user: ChatUser,
    State(service): State<Arc<MessageService>>,
    AppJson(dto): AppJson<SendMessageDto>,
) -> Result<Json<ApiResponse<MessageReplyDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reply = MessageReplyDto::from(service.handle(user.id(), &dto.text).await?);
    let meta = reply
        .results
        .as_ref()
        .map(|page| Meta::total(page.total_items));

    Ok(Json(ApiResponse::success(Some(reply), None, meta)))
}
