use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        message::{MessageDto, PendingMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::message::MessageService,
        state::AppState,
        util::parse::parse_path_id,
    },
};

pub static MESSAGE_TAG: &str = "message";

/// GET /api/admin/messages/pending - Message moderation queue
///
/// Returns unmoderated messages oldest first with sender, conversation and the
/// conversation's listing. Missing relations are `null`.
#[utoipa::path(
    get,
    path = "/api/admin/messages/pending",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Unmoderated messages", body = Vec<PendingMessageDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not moderate messages", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_pending_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ModerateMessages])
        .await?;

    let messages = MessageService::new(&state.db).get_pending().await?;

    let dto: Vec<PendingMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// PATCH /api/admin/messages/{id}/moderate - Mark a message as reviewed
#[utoipa::path(
    patch,
    path = "/api/admin/messages/{id}/moderate",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Moderated message", body = MessageDto),
        (status = 400, description = "Non-numeric id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not moderate messages", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn moderate_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ModerateMessages])
        .await?;

    let id = parse_path_id(&id)?;
    let message = MessageService::new(&state.db)
        .mark_moderated(&actor, id)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}
