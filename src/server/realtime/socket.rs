use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::account::{AuthUser, Role},
    state::AppState,
};

const PING_INTERVAL_SECONDS: u64 = 30;

#[derive(Deserialize)]
pub struct SocketParams {
    pub token: Option<String>,
}

/// Opens the caller's realtime event stream.
///
/// Browsers cannot set headers on WebSocket requests, so the access token is
/// passed in the query string and checked like a bearer token. The socket only
/// pushes events; everything the user does goes through the HTTP API.
///
/// # Returns
/// - `101 Switching Protocols` - Connection upgraded
/// - `401 Unauthorized` - Missing, expired or invalid token
/// - `403 Forbidden` - Account blocked
#[utoipa::path(
    get,
    path = "/api/ws",
    tag = "realtime",
    params(
        ("token" = String, Query, description = "Access token of the connecting user")
    ),
    responses(
        (status = 101, description = "Upgraded to a WebSocket"),
        (status = 401, description = "Missing or invalid token", body = crate::model::api::ErrorDto),
        (status = 403, description = "Account blocked", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    Query(params): Query<SocketParams>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::with_token(&state.db, &state.tokens, params.token.as_deref())
        .require(&[Role::Client, Role::Lawyer, Role::Admin])
        .await?;

    Ok(ws.on_upgrade(move |socket| handle_connection(socket, state, user)))
}

async fn handle_connection(socket: WebSocket, state: AppState, user: AuthUser) {
    tracing::debug!("WebSocket opened for {} {}", user.role, user.id);

    let (mut sender, mut receiver) = socket.split();
    let mut events = state.hub.subscribe(&user.id).await;

    let mut send_task = tokio::spawn(async move {
        let mut ping = tokio::time::interval(Duration::from_secs(PING_INTERVAL_SECONDS));
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Ok(event) => {
                        let json = match serde_json::to_string(&event) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("Failed to encode realtime event: {}", e);
                                continue;
                            }
                        };
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        tracing::debug!("WebSocket client lagged, {} events dropped", missed);
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = ping.tick() => {
                    if sender.send(Message::Ping(Default::default())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            if let Message::Close(_) = message {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => {
            send_task.abort();
            // The receiver must be dropped before the channel can be released.
            let _ = send_task.await;
        }
    }

    state.hub.release(&user.id).await;

    tracing::debug!("WebSocket closed for {} {}", user.role, user.id);
}
