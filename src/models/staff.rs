//! Staff session model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for a staff session opened with the passcode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl StaffClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

/// Staff login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct StaffLoginRequest {
    pub passcode: String,
}

/// Staff login response
#[derive(Debug, Serialize, ToSchema)]
pub struct StaffLoginResponse {
    pub token: String,
    pub token_type: String,
    /// Expiration as a Unix timestamp
    pub expires_at: i64,
}
