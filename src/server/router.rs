use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, admin_auth, appointment, chat, chatbot, client, client_auth, lawyer, lawyer_auth,
        notification, slot, video,
    },
    doc::ApiDoc,
    error::{config::ConfigError, AppError},
    realtime::socket,
    state::AppState,
};

/// Requests per second replenished for each client IP on the auth routes.
const AUTH_RATE_PER_SECOND: u64 = 2;
const AUTH_BURST_SIZE: u32 = 10;

pub fn router() -> Result<Router<AppState>, AppError> {
    let router = Router::new()
        .merge(auth_routes()?)
        .route("/api/lawyers", get(lawyer::get_public_lawyers))
        .route(
            "/api/client/profile",
            get(client::get_profile).put(client::update_profile),
        )
        .route("/api/client/profile/image", put(client::update_profile_image))
        .route("/api/lawyer/profile-image", put(lawyer::update_profile_image))
        .route("/api/lawyer/clients", get(lawyer::get_clients))
        .route(
            "/api/lawyer/case-history/{client_id}",
            get(lawyer::get_case_history),
        )
        .route(
            "/api/lawyer/legal-history",
            post(lawyer::create_legal_history),
        )
        .route(
            "/api/lawyer/legal-history/{client_id}",
            get(lawyer::get_legal_history),
        )
        .route("/api/admin/client", get(admin::get_clients))
        .route("/api/admin/client/{id}/block", put(admin::block_client))
        .route("/api/admin/client/{id}/unblock", put(admin::unblock_client))
        .route("/api/admin/lawyer", get(admin::get_lawyers))
        .route("/api/admin/lawyer/{id}/verify", put(admin::verify_lawyer))
        .route("/api/admin/lawyer/{id}/block", put(admin::block_lawyer))
        .route("/api/admin/lawyer/{id}/unblock", put(admin::unblock_lawyer))
        .route(
            "/api/slots/day",
            post(slot::create_for_day).delete(slot::delete_for_day),
        )
        .route(
            "/api/slots/all-days",
            post(slot::create_for_all_days).delete(slot::delete_for_all_days),
        )
        .route("/api/slots/lawyer", get(slot::get_own))
        .route("/api/slots/{lawyer_id}", get(slot::get_by_date))
        .route(
            "/api/appointments/client",
            post(appointment::create_appointment)
                .get(appointment::get_client_appointments)
                .put(appointment::cancel_client_appointment),
        )
        .route(
            "/api/appointments/client/{id}",
            get(appointment::get_client_appointment),
        )
        .route(
            "/api/appointments/success/{payment_id}",
            get(appointment::get_success_details),
        )
        .route(
            "/api/appointments/lawyer",
            get(appointment::get_lawyer_appointments).put(appointment::update_lawyer_appointment),
        )
        .route(
            "/api/appointments/lawyer/{id}",
            get(appointment::get_lawyer_appointment),
        )
        .route("/api/appointments/webhook", post(appointment::webhook))
        .route("/api/video/client/day", get(video::get_client_sessions))
        .route("/api/video/client/{id}", get(video::get_client_session))
        .route("/api/video/lawyer", get(video::get_lawyer_upcoming))
        .route("/api/video/lawyer/day", get(video::get_lawyer_sessions))
        .route("/api/video/lawyer/{id}", get(video::get_lawyer_session))
        .route(
            "/api/video/lawyer/complete/{room_id}",
            put(video::complete_session),
        )
        .route("/api/chat", get(chat::get_chats).post(chat::create_chat))
        .route("/api/chat/clients", get(chat::get_chat_clients))
        .route(
            "/api/chat/{id}/messages",
            get(chat::get_messages).post(chat::send_message),
        )
        .route("/api/chat/{id}/received", put(chat::mark_received))
        .route(
            "/api/notifications",
            get(notification::get_notifications).delete(notification::clear_notifications),
        )
        .route(
            "/api/notifications/{id}",
            delete(notification::clear_notification),
        )
        .route(
            "/api/chatbot",
            get(chatbot::get_history).post(chatbot::send_message),
        )
        .route("/api/ws", get(socket::connect))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()));

    Ok(router)
}

/// Login, registration and token routes, rate limited per client IP.
fn auth_routes() -> Result<Router<AppState>, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(AUTH_RATE_PER_SECOND)
        .burst_size(AUTH_BURST_SIZE)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid auth rate limit".to_string()))?;

    let router = Router::new()
        .route("/api/client/auth", post(client_auth::register))
        .route("/api/client/auth/signin", post(client_auth::signin))
        .route("/api/client/auth/oauth", post(client_auth::oauth_signin))
        .route("/api/client/auth/resend-otp", post(client_auth::resend_otp))
        .route(
            "/api/client/auth/otp-verification",
            post(client_auth::verify_otp),
        )
        .route(
            "/api/client/auth/signup-verification",
            post(client_auth::verify_signup),
        )
        .route("/api/client/auth/refresh", get(client_auth::refresh))
        .route(
            "/api/client/auth/forgot-password",
            post(client_auth::forgot_password),
        )
        .route(
            "/api/client/auth/update-password",
            patch(client_auth::update_password),
        )
        .route("/api/client/auth/logout", post(client_auth::logout))
        .route("/api/lawyer/auth", post(lawyer_auth::register))
        .route("/api/lawyer/auth/login", post(lawyer_auth::login))
        .route("/api/lawyer/auth/resend-otp", post(lawyer_auth::resend_otp))
        .route(
            "/api/lawyer/auth/validate-otp",
            post(lawyer_auth::validate_otp),
        )
        .route("/api/lawyer/auth/refresh", get(lawyer_auth::refresh))
        .route(
            "/api/lawyer/auth/forgot-password",
            post(lawyer_auth::forgot_password),
        )
        .route(
            "/api/lawyer/auth/update-password",
            patch(lawyer_auth::update_password),
        )
        .route("/api/lawyer/auth/logout", post(lawyer_auth::logout))
        .route("/api/admin/auth", post(admin_auth::login))
        .route(
            "/api/admin/auth/otp-verification",
            post(admin_auth::verify_otp),
        )
        .route("/api/admin/auth/refresh", get(admin_auth::refresh))
        .route("/api/admin/auth/logout", post(admin_auth::logout))
        .layer(GovernorLayer::new(Arc::new(governor)));

    Ok(router)
}

/// Lets the frontend call the API with its session cookie.
pub fn cors(client_url: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(client_url.trim_end_matches('/'))
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CLIENT_URL".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}
