// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Delegated token verification.
//!
//! Cryptographic verification is not performed in-process: each request makes
//! one fresh round trip to the identity provider's verify endpoint. There is
//! no caching and no retry; a failed call surfaces immediately. Callers must
//! treat verification as possibly slow and fallible per request.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use super::claims::VerifiedClaims;
use super::error::AuthError;

/// Verification request timeout.
const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// External token verifier.
///
/// The production implementation is [`QuickAuthVerifier`]; tests substitute
/// a mock to observe or suppress provider calls.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify an opaque bearer token for the given domain and return the
    /// provider-asserted claims.
    ///
    /// # Errors
    /// [`AuthError::InvalidToken`] on provider rejection or transport
    /// failure; the distinction is logged, never surfaced.
    async fn verify(&self, token: &str, domain: &str) -> Result<VerifiedClaims, AuthError>;
}

/// Body sent to the provider's verify endpoint.
#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
    domain: &'a str,
}

/// Quick Auth verifier backed by the provider's HTTPS verify endpoint.
#[derive(Clone)]
pub struct QuickAuthVerifier {
    verify_url: Url,
    client: reqwest::Client,
}

impl QuickAuthVerifier {
    /// Create a verifier for the given endpoint.
    pub fn new(verify_url: Url) -> Self {
        Self {
            verify_url,
            client: reqwest::Client::builder()
                .timeout(VERIFY_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// The configured verification endpoint.
    pub fn verify_url(&self) -> &Url {
        &self.verify_url
    }
}

#[async_trait]
impl TokenVerifier for QuickAuthVerifier {
    async fn verify(&self, token: &str, domain: &str) -> Result<VerifiedClaims, AuthError> {
        let response = self
            .client
            .post(self.verify_url.clone())
            .json(&VerifyRequest { token, domain })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "token verification transport failure");
                AuthError::InvalidToken
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "provider rejected token");
            return Err(AuthError::InvalidToken);
        }

        response.json::<VerifiedClaims>().await.map_err(|e| {
            tracing::warn!(error = %e, "provider returned malformed claims");
            AuthError::InvalidToken
        })
    }
}
