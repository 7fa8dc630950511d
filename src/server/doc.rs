//! OpenAPI document of the HTTP API, served by Swagger UI at `/api/docs`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{
            AppointmentDetailsDto, AppointmentDto, CheckoutDto, CreateAppointmentDto,
            PaginatedAppointmentDetailsDto, PaginatedAppointmentsDto, UpdateAppointmentDto,
        },
        auth::{
            AccessTokenDto, ForgotPasswordDto, LoginDto, LoginSuccessDto, OAuthSigninDto,
            OtpSentDto, OtpVerificationDto, RegisterClientDto, RegisterLawyerDto, ResendOtpDto,
            UpdatePasswordDto,
        },
        chat::{
            ChatDto, ChatListItemDto, ChatMessageDto, ChatMessagesDto, CreateChatDto,
            CreateChatMessageDto,
        },
        chatbot::{ChatBotMessageDto, SendChatBotMessageDto},
        client::{ClientDto, PaginatedClientsDto, ProfileImageDto, UpdateClientProfileDto},
        lawyer::{LawyerDto, PaginatedLawyersDto},
        legal_history::{CreateLegalHistoryDto, LegalHistoryDto, PaginatedLegalHistoryDto},
        notification::{ClearNotificationsDto, NotificationDto},
        slot::{SlotChangeDto, SlotDto, SlotTimesDto},
        video::VideoSectionDto,
    },
    server::{controller, realtime},
};

/// Adds the bearer access token scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Lexconsult API",
        description = "Booking, payment and messaging backend of the legal consultation platform."
    ),
    security(("bearer" = [])),
    paths(
        controller::client_auth::register,
        controller::client_auth::signin,
        controller::client_auth::oauth_signin,
        controller::client_auth::resend_otp,
        controller::client_auth::verify_otp,
        controller::client_auth::verify_signup,
        controller::client_auth::refresh,
        controller::client_auth::forgot_password,
        controller::client_auth::update_password,
        controller::client_auth::logout,
        controller::lawyer_auth::register,
        controller::lawyer_auth::login,
        controller::lawyer_auth::resend_otp,
        controller::lawyer_auth::validate_otp,
        controller::lawyer_auth::refresh,
        controller::lawyer_auth::forgot_password,
        controller::lawyer_auth::update_password,
        controller::lawyer_auth::logout,
        controller::admin_auth::login,
        controller::admin_auth::verify_otp,
        controller::admin_auth::refresh,
        controller::admin_auth::logout,
        controller::client::get_profile,
        controller::client::update_profile,
        controller::client::update_profile_image,
        controller::lawyer::get_public_lawyers,
        controller::lawyer::update_profile_image,
        controller::lawyer::get_clients,
        controller::lawyer::get_case_history,
        controller::lawyer::create_legal_history,
        controller::lawyer::get_legal_history,
        controller::admin::get_clients,
        controller::admin::block_client,
        controller::admin::unblock_client,
        controller::admin::get_lawyers,
        controller::admin::verify_lawyer,
        controller::admin::block_lawyer,
        controller::admin::unblock_lawyer,
        controller::slot::create_for_day,
        controller::slot::create_for_all_days,
        controller::slot::delete_for_day,
        controller::slot::delete_for_all_days,
        controller::slot::get_own,
        controller::slot::get_by_date,
        controller::appointment::create_appointment,
        controller::appointment::get_client_appointments,
        controller::appointment::cancel_client_appointment,
        controller::appointment::get_client_appointment,
        controller::appointment::get_success_details,
        controller::appointment::get_lawyer_appointments,
        controller::appointment::update_lawyer_appointment,
        controller::appointment::get_lawyer_appointment,
        controller::appointment::webhook,
        controller::video::get_client_sessions,
        controller::video::get_client_session,
        controller::video::get_lawyer_upcoming,
        controller::video::get_lawyer_sessions,
        controller::video::get_lawyer_session,
        controller::video::complete_session,
        controller::chat::get_chats,
        controller::chat::create_chat,
        controller::chat::get_chat_clients,
        controller::chat::get_messages,
        controller::chat::send_message,
        controller::chat::mark_received,
        controller::notification::get_notifications,
        controller::notification::clear_notifications,
        controller::notification::clear_notification,
        controller::chatbot::get_history,
        controller::chatbot::send_message,
        realtime::socket::connect,
    ),
    components(schemas(
        ErrorDto, MessageDto,
        RegisterClientDto, RegisterLawyerDto, LoginDto, OtpVerificationDto, ResendOtpDto,
        OAuthSigninDto, ForgotPasswordDto, UpdatePasswordDto, OtpSentDto, LoginSuccessDto,
        AccessTokenDto,
        ClientDto, PaginatedClientsDto, UpdateClientProfileDto, ProfileImageDto,
        LawyerDto, PaginatedLawyersDto,
        LegalHistoryDto, CreateLegalHistoryDto, PaginatedLegalHistoryDto,
        SlotDto, SlotTimesDto, SlotChangeDto,
        CreateAppointmentDto, CheckoutDto, AppointmentDto, AppointmentDetailsDto,
        PaginatedAppointmentsDto, PaginatedAppointmentDetailsDto, UpdateAppointmentDto,
        VideoSectionDto,
        ChatDto, ChatListItemDto, ChatMessageDto, ChatMessagesDto, CreateChatDto,
        CreateChatMessageDto,
        ChatBotMessageDto, SendChatBotMessageDto,
        NotificationDto, ClearNotificationsDto,
    )),
    tags(
        (name = "client-auth", description = "Client registration and login"),
        (name = "lawyer-auth", description = "Lawyer registration and login"),
        (name = "admin-auth", description = "Admin login"),
        (name = "client", description = "Client profile"),
        (name = "lawyer", description = "Lawyer directory, clients and legal history"),
        (name = "admin", description = "Account management"),
        (name = "slot", description = "Lawyer availability"),
        (name = "appointment", description = "Bookings and payments"),
        (name = "video", description = "Video consultation sessions"),
        (name = "chat", description = "Client and lawyer messaging"),
        (name = "notification", description = "User notifications"),
        (name = "chatbot", description = "Legal assistant"),
        (name = "realtime", description = "Event stream")
    )
)]
pub struct ApiDoc;
