use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::RefreshSession},
    model::account::Role,
    service::token::TokenService,
};


fn tokens() -> TokenService {
    TokenService::new("access-secret", "refresh-secret")
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn auth_error(result: Result<impl std::fmt::Debug, AppError>) -> AuthError {
    match result {
        Err(AppError::AuthErr(err)) => err,
        other => panic!("expected an auth error, got {:?}", other),
    }
}
