//! # Authentication
//!
//! Credential login issuing HMAC-signed JWTs, plus the Bearer middleware
//! protecting the `/api` routes. The authenticated username travels with
//! the request as an [`AuthUser`] extension and flows into service logging
//! as an explicit actor parameter — there is no ambient user context.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated username.
    pub sub: String,
    /// Issued-at, seconds since epoch.
    pub iat: usize,
    /// Expiry, seconds since epoch.
    pub exp: usize,
}

/// Token issue and validation service.
#[derive(Clone)]
pub struct JwtService {
    secret: Arc<String>,
    token_ttl_hours: u64,
}

impl JwtService {
    /// Create a service signing with the given secret.
    pub fn new(secret: String, token_ttl_hours: u64) -> Self {
        Self {
            secret: Arc::new(secret),
            token_ttl_hours,
        }
    }

    /// Issue a token for an authenticated username.
    pub fn issue(&self, username: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.token_ttl_hours as i64);
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("failed to encode token: {e}")))
    }

    /// Validate a token and return its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "token validation failed");
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ApiError::Unauthorized("token expired".to_string())
                }
                _ => ApiError::Unauthorized("invalid token".to_string()),
            }
        })
    }
}

/// The authenticated caller, injected by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Username from the token's `sub` claim.
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("missing authentication context".to_string()))
    }
}

/// Bearer-token middleware for the protected route tree.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("expected bearer token".to_string()))?;

    let claims = state.jwt.validate(token)?;
    request.extensions_mut().insert(AuthUser {
        username: claims.sub,
    });
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-at-least-32-characters-long".to_string(), 8)
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let jwt = service();
        let token = jwt.issue("admin").unwrap();
        let claims = jwt.validate(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let err = service().validate("not-a-token").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service().issue("admin").unwrap();
        let other = JwtService::new("a-completely-different-signing-secret".to_string(), 8);
        assert!(other.validate(&token).is_err());
    }
}
