//! Authentication middleware
//!
//! Validates the session token on every protected route and makes the
//! signed-in user available to handlers. The role always comes from the
//! signed token, never from anything the client stores.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ErrorResponse;
use crate::services::auth::decode_claims;
use crate::AppState;
use shared::UserRole;

/// Authenticated user information extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Middleware that validates the bearer token and attaches [`AuthUser`]
/// to the request extensions
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    let claims = match decode_claims(token, &state.config.jwt.secret) {
        Ok(claims) => claims,
        Err(e) => {
            return e.into_response();
        }
    };

    let auth_user = AuthUser {
        email: claims.sub,
        name: claims.name,
        role: claims.role,
    };

    request.extensions_mut().insert(auth_user);

    next.run(request).await
}

fn unauthorized_response(message: &str) -> Response {
    let error = ErrorResponse::new("UNAUTHORIZED", message, None);
    (StatusCode::UNAUTHORIZED, Json(error)).into_response()
}

/// Extractor for the authenticated user
/// Use this in handlers to get the current user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                let error = ErrorResponse::new("UNAUTHORIZED", "Authentication required", None);
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}
