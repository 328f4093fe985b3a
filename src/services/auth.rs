//! Staff passcode gate

use chrono::{Duration, Utc};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::staff::{StaffClaims, StaffLoginResponse},
};

const STAFF_SUBJECT: &str = "staff";

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Exchange the staff passcode for a session token
    pub fn login(&self, passcode: &str) -> AppResult<StaffLoginResponse> {
        if !constant_time_eq(passcode.as_bytes(), self.config.staff_passcode.as_bytes()) {
            tracing::warn!("Rejected staff passcode attempt");
            return Err(AppError::Authentication("Invalid passcode".to_string()));
        }

        let now = Utc::now();
        // Capped at one year
        let hours = self.config.session_hours.min(24 * 366) as i64;
        let expires = now + Duration::hours(hours);
        let claims = StaffClaims {
            sub: STAFF_SUBJECT.to_string(),
            exp: expires.timestamp(),
            iat: now.timestamp(),
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::info!("Staff session opened until {}", expires);

        Ok(StaffLoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_at: claims.exp,
        })
    }

    /// Validate a bearer token issued by `login`
    pub fn verify(&self, token: &str) -> AppResult<StaffClaims> {
        let claims = StaffClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        if claims.sub != STAFF_SUBJECT {
            return Err(AppError::Authentication("Not a staff session".to_string()));
        }
        Ok(claims)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
