//! Authentication service for dashboard login and session tokens
//!
//! Roles are carried in a server-signed JWT rather than trusted from
//! client-side storage.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::Stores;
use shared::UserRole;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    stores: Stores,
    jwt_secret: String,
    access_token_expiry: i64,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account email
    pub sub: String,
    pub name: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
}

/// Signed-in user as returned to the dashboards
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub role: UserRole,
    pub name: String,
}

/// Successful login response payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthService {
    pub fn new(stores: Stores, config: &Config) -> Self {
        Self {
            stores,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
        }
    }

    /// Authenticate with email and password and issue a session token
    pub async fn login(&self, input: LoginInput) -> AppResult<LoginResponse> {
        let account = self
            .stores
            .find_user(&input.email)
            .await
            .ok_or(AppError::InvalidCredentials)?;

        let valid = bcrypt::verify(&input.password, &account.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(LoginResponse {
            user: SessionUser {
                email: account.email,
                role: account.role,
                name: account.name,
            },
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Validate an access token and return its claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode_claims(token, &self.jwt_secret)
    }
}

/// Decode and validate a session token against the signing secret
pub fn decode_claims(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
