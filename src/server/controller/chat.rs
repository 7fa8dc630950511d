use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        chat::{ChatDto, ChatListItemDto, ChatMessageDto, ChatMessagesDto, CreateChatDto, CreateChatMessageDto},
        client::ClientDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::account::Role,
        service::chat::ChatService,
        state::AppState,
        util::validate,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Get the signed-in user's chats.
///
/// # Access Control
/// - `Client` or `Lawyer`
///
/// # Returns
/// - `200 OK` - Chats ordered by latest activity, with unread message counts
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/chat",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Chats of the user", body = Vec<ChatListItemDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    let chats = ChatService::new(&state.db, &state.hub).chats_for(&user).await?;

    let dtos: Vec<ChatListItemDto> = chats.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Open a chat between a client and a lawyer.
///
/// The caller fills their own side; only the other participant's ID is read
/// from the body. An existing chat between the two is returned unchanged.
///
/// # Access Control
/// - `Client` - Provides `lawyer_id`
/// - `Lawyer` - Provides `client_id`
///
/// # Returns
/// - `201 Created` - Chat between the two
/// - `400 Bad Request` - Missing ID or client without name or profile image
/// - `404 Not Found` - Unknown client or lawyer
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = CreateChatDto,
    responses(
        (status = 201, description = "Chat created or found", body = ChatDto),
        (status = 400, description = "Missing or invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Client or lawyer not found", body = ErrorDto)
    ),
)]
pub async fn create_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateChatDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    let (lawyer_id, client_id) = match user.role {
        Role::Client => {
            validate::required(&[("lawyer_id", payload.lawyer_id.as_deref())])?;
            (payload.lawyer_id.unwrap_or_default(), user.id)
        }
        _ => {
            validate::required(&[("client_id", payload.client_id.as_deref())])?;
            (user.id, payload.client_id.unwrap_or_default())
        }
    };

    let chat = ChatService::new(&state.db, &state.hub)
        .create_chat(&lawyer_id, &client_id)
        .await?;

    Ok((StatusCode::CREATED, Json(chat.into_dto())))
}

/// Clients a lawyer can start a chat with.
#[utoipa::path(
    get,
    path = "/api/chat/clients",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Clients with name and profile image", body = Vec<ClientDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_chat_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let clients = ChatService::new(&state.db, &state.hub)
        .clients_for_lawyer()
        .await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/chat/{id}/messages",
    tag = CHAT_TAG,
    params(("id" = String, Path, description = "Chat ID")),
    responses(
        (status = 200, description = "Chat with its messages, oldest first", body = ChatMessagesDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    let chat = ChatService::new(&state.db, &state.hub)
        .messages(&id, &user.id)
        .await?;

    Ok((StatusCode::OK, Json(chat.into_dto())))
}

/// Send a message in a chat.
///
/// The receiver gets the message over their realtime connection.
///
/// # Access Control
/// - Chat participant
///
/// # Returns
/// - `201 Created` - Stored message
/// - `400 Bad Request` - Missing receiver, empty or overlong message
/// - `403 Forbidden` - Sender or receiver is not a participant
/// - `404 Not Found` - Unknown chat
#[utoipa::path(
    post,
    path = "/api/chat/{id}/messages",
    tag = CHAT_TAG,
    params(("id" = String, Path, description = "Chat ID")),
    request_body = CreateChatMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ChatMessageDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<CreateChatMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    validate::required(&[
        ("receiver_id", payload.receiver_id.as_deref()),
        ("message", payload.message.as_deref()),
    ])?;

    let message = ChatService::new(&state.db, &state.hub)
        .create_message(
            &id,
            &user.id,
            payload.receiver_id.as_deref().unwrap_or_default(),
            payload.message.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Mark every message sent to the caller in a chat as received.
#[utoipa::path(
    put,
    path = "/api/chat/{id}/received",
    tag = CHAT_TAG,
    params(("id" = String, Path, description = "Chat ID")),
    responses(
        (status = 200, description = "Messages marked received", body = MessageDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto)
    ),
)]
pub async fn mark_received(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    let updated = ChatService::new(&state.db, &state.hub)
        .mark_received(&id, &user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} messages marked as received", updated))),
    ))
}
