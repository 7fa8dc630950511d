use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chatbot::{ChatBotMessageDto, SendChatBotMessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::account::Role,
        service::chatbot::ChatBotService, state::AppState,
    },
};

/// Tag for grouping assistant endpoints in OpenAPI documentation
pub static CHATBOT_TAG: &str = "chatbot";

/// Get the signed-in client's conversation with the assistant, oldest first.
#[utoipa::path(
    get,
    path = "/api/chatbot",
    tag = CHATBOT_TAG,
    responses(
        (status = 200, description = "Conversation history", body = Vec<ChatBotMessageDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let messages = ChatBotService::new(&state.db).history(&user.id).await?;

    let dtos: Vec<ChatBotMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Ask the assistant a question.
///
/// Both the question and the reply are stored in the history.
///
/// # Returns
/// - `200 OK` - The assistant's reply
/// - `400 Bad Request` - Empty or overlong message
#[utoipa::path(
    post,
    path = "/api/chatbot",
    tag = CHATBOT_TAG,
    request_body = SendChatBotMessageDto,
    responses(
        (status = 200, description = "Assistant reply", body = Vec<ChatBotMessageDto>),
        (status = 400, description = "Empty or overlong message", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendChatBotMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let replies = ChatBotService::new(&state.db)
        .send(&user.id, payload.message.as_deref())
        .await?;

    let dtos: Vec<ChatBotMessageDto> = replies.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
