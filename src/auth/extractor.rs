// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated requests.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(ctx): Auth) -> impl IntoResponse {
//!     // ctx is AuthContext { wallet, fid }
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::claims::AuthContext;
use super::error::AuthError;
use crate::state::AppState;

/// Extractor requiring a verified bearer identity.
///
/// Parses the `Authorization: Bearer <token>` header, delegates verification
/// to the configured [`super::TokenVerifier`], and normalizes the claims into
/// an [`AuthContext`]. Bearer parsing failures never reach the verifier.
pub struct Auth(pub AuthContext);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A middleware may have already authenticated the request.
        if let Some(ctx) = parts.extensions.get::<AuthContext>().cloned() {
            return Ok(Auth(ctx));
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingBearerToken)?
            .to_str()
            .map_err(|_| AuthError::MissingBearerToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingBearerToken)?
            .trim();
        if token.is_empty() {
            return Err(AuthError::MissingBearerToken);
        }

        let claims = state.verifier.verify(token, &state.auth_domain).await?;
        let ctx = AuthContext::from_claims(&claims, &state.auth_domain)?;

        Ok(Auth(ctx))
    }
}
