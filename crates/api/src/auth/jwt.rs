//! JWT token generation and validation.
//!
//! Access and refresh tokens are both HS256-signed JWTs carrying a
//! [`Claims`] payload; a `token_type` claim keeps them from being used
//! interchangeably. Claims carry the principal explicitly -- user id,
//! tenant id, and role -- so handlers never consult ambient state to learn
//! who is calling.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pagesmith_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `token_type` claim value for access tokens.
pub const TOKEN_TYPE_ACCESS: &str = "access";
/// `token_type` claim value for refresh tokens.
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The tenant the user belongs to.
    pub tenant_id: DbId,
    /// The user's role name (e.g. `"OWNER"`, `"EDITOR"`).
    pub role: String,
    /// Either [`TOKEN_TYPE_ACCESS`] or [`TOKEN_TYPE_REFRESH`].
    pub token_type: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for revocation / audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }
}

/// Generate an HS256 access token for the given principal.
pub fn generate_access_token(
    user_id: DbId,
    tenant_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    generate_token(
        user_id,
        tenant_id,
        role,
        TOKEN_TYPE_ACCESS,
        now,
        now + config.access_token_expiry_mins * 60,
        config,
    )
}

/// Generate an HS256 refresh token for the given principal.
pub fn generate_refresh_token(
    user_id: DbId,
    tenant_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    generate_token(
        user_id,
        tenant_id,
        role,
        TOKEN_TYPE_REFRESH,
        now,
        now + config.refresh_token_expiry_days * 24 * 60 * 60,
        config,
    )
}

fn generate_token(
    user_id: DbId,
    tenant_id: DbId,
    role: &str,
    token_type: &str,
    iat: i64,
    exp: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        tenant_id,
        role: role.to_string(),
        token_type: token_type.to_string(),
        exp,
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically. Callers must also
/// check `token_type` against the context the token is used in.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
