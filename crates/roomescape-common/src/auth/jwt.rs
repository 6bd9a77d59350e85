//! Session tokens
//!
//! Tokens are HS256 JWTs carrying the member id as subject and an expiry
//! claim. There is no server-side session state.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use roomescape_core::MemberId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Issues and resolves opaque session tokens
pub trait TokenProvider: Send + Sync {
    /// Issue a token identifying the member
    fn issue(&self, member_id: MemberId) -> Result<String, AppError>;

    /// Resolve a token back to the member id it was issued for
    fn resolve(&self, token: &str) -> Result<MemberId, AppError>;
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (member ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the member ID from the subject
    ///
    /// # Errors
    /// Returns an error if the subject is not a numeric id
    pub fn member_id(&self) -> Result<MemberId, AppError> {
        MemberId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Encode a token for the member
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn encode_token(&self, member_id: MemberId) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: member_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl TokenProvider for JwtService {
    fn issue(&self, member_id: MemberId) -> Result<String, AppError> {
        self.encode_token(member_id)
    }

    fn resolve(&self, token: &str) -> Result<MemberId, AppError> {
        self.decode_token(token)?.member_id()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
