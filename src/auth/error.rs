// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Every variant responds 401 with a fixed message. The messages deliberately
//! do not distinguish *why* verification failed beyond the coarse buckets
//! below: provider rejections, transport failures, and malformed claims all
//! look the same to the caller. The precise cause is logged where it occurs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Authentication/authorization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header, not `Bearer <token>` form, or empty token.
    #[error("Missing bearer token")]
    MissingBearerToken,
    /// The provider rejected the token, or the verification call failed.
    #[error("Invalid token")]
    InvalidToken,
    /// Verified claims lack an audience matching the configured domain.
    #[error("Invalid token audience")]
    InvalidAudience,
    /// Verified claims lack a resolvable identity id or wallet.
    #[error("Invalid token claims")]
    InvalidClaims,
    /// The caller-declared wallet does not match the token-derived identity.
    #[error("Wallet mismatch")]
    WalletMismatch,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

impl AuthError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_bearer_returns_401() {
        let response = AuthError::MissingBearerToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error"], "Missing bearer token");
    }

    #[test]
    fn every_variant_is_unauthorized() {
        for err in [
            AuthError::MissingBearerToken,
            AuthError::InvalidToken,
            AuthError::InvalidAudience,
            AuthError::InvalidClaims,
            AuthError::WalletMismatch,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn messages_are_the_fixed_wire_strings() {
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(
            AuthError::InvalidAudience.to_string(),
            "Invalid token audience"
        );
        assert_eq!(AuthError::InvalidClaims.to_string(), "Invalid token claims");
        assert_eq!(AuthError::WalletMismatch.to_string(), "Wallet mismatch");
    }
}
