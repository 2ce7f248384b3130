//! Admin session extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use malar_core::error::CoreError;
use tower_cookies::Cookies;
use uuid::Uuid;

use crate::auth::session::session_id;
use crate::error::AppError;
use crate::state::AppState;

/// An opened admin gate, identified by the session cookie.
///
/// Use as an extractor on every admin action; requests without a live
/// session are rejected with `401`. Pages that render either the login
/// form or the panel take `Option<AdminUser>` instead.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub session_id: Uuid,
}

async fn lookup(parts: &mut Parts, state: &AppState) -> Option<AdminUser> {
    let cookies = <Cookies as FromRequestParts<AppState>>::from_request_parts(parts, state)
        .await
        .ok()?;
    let session_id = session_id(&cookies)?;
    state
        .sessions
        .touch(session_id)
        .await
        .then_some(AdminUser { session_id })
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        lookup(parts, state).await.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Please log in to the admin panel first".into(),
            ))
        })
    }
}

impl OptionalFromRequestParts<AppState> for AdminUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(lookup(parts, state).await)
    }
}
