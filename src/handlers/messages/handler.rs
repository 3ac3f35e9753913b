//! Direct message handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::MessageService,
    state::AppState,
};

use super::{
    request::{HistoryQuery, SendMessageRequest},
    response::{
        ConversationResponse, ConversationsResponse, HistoryResponse, MarkReadResponse,
        MessageResponse,
    },
};

/// Conversation list, most recent first
pub async fn list_conversations(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ConversationsResponse>> {
    let conversations = MessageService::conversations(state.db(), &auth_user.id)
        .await?
        .into_iter()
        .map(ConversationResponse::from)
        .collect();

    Ok(Json(ConversationsResponse { conversations }))
}

/// Paginated history with one partner; marks incoming messages read
pub async fn history(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(50).min(MAX_PAGE_SIZE);

    let (messages, total) =
        MessageService::history(state.db(), &auth_user.id, &user_id, page, per_page).await?;

    Ok(Json(HistoryResponse {
        messages: messages.into_iter().map(MessageResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Send a message over REST; relays to the recipient's socket if online
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    payload.validate()?;

    let message = MessageService::send(
        state.db(),
        state.hub(),
        &auth_user.id,
        &user_id,
        &payload.content,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Mark a conversation read
pub async fn mark_read(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<MarkReadResponse>> {
    let marked = MessageService::mark_read(state.db(), &auth_user.id, &user_id).await?;
    Ok(Json(MarkReadResponse { marked }))
}
