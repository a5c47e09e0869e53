//! JWT utilities for authentication
//!
//! Provides access token encoding, decoding, and validation using the
//! `jsonwebtoken` crate. The signing algorithm and secret are supplied
//! by configuration.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use skycast_core::User;

use crate::config::JwtConfig;
use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Admin role flag carried in the token
    #[serde(default)]
    pub is_admin: bool,
}

impl Claims {
    /// Get the user ID carried in the subject claim
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as an ID
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret, algorithm name, and expiry
    ///
    /// # Errors
    /// Returns an error if the algorithm name is not recognized
    pub fn new(secret: &str, algorithm: &str, access_token_expiry: i64) -> Result<Self, AppError> {
        let algorithm = algorithm
            .parse::<Algorithm>()
            .map_err(|_| AppError::Config(format!("Unsupported JWT algorithm: {algorithm}")))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            access_token_expiry,
        })
    }

    /// Create a service from application configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, AppError> {
        Self::new(&config.secret, &config.algorithm, config.access_token_expiry)
    }

    /// Access token lifetime in seconds
    #[must_use]
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    /// Create a signed access token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn create_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            is_admin: user.is_admin,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns `TokenExpired` past the exp claim, `InvalidToken` on any
    /// cryptographic or format failure
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &self.algorithm)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}
