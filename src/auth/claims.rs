// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Verified claims and the authenticated request context.
//!
//! The provider returns a loosely-typed claims object. This module narrows it
//! into [`AuthContext`] with an explicit, documented fallback order: the
//! dedicated field is consulted first (`fid`, `wallet_address`) and the
//! generic fallback (`sub`, `address`) only when it is absent.

use serde::Deserialize;

use super::error::AuthError;
use crate::identity::{is_valid_wallet, normalize_wallet};
use crate::models::WalletAddress;

/// Claims asserted by the identity provider for a verified token.
///
/// All fields are optional on the wire; [`AuthContext::from_claims`] decides
/// which absences are fatal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifiedClaims {
    /// Generic subject. Number or numeric string; fallback for `fid`.
    #[serde(default)]
    pub sub: Option<serde_json::Value>,

    /// Numeric identity id issued by the provider.
    #[serde(default)]
    pub fid: Option<i64>,

    /// Wallet address associated with the identity.
    #[serde(default)]
    pub wallet_address: Option<String>,

    /// Generic address field; fallback for `wallet_address`.
    #[serde(default)]
    pub address: Option<String>,

    /// Token audience; must match the configured domain.
    #[serde(default)]
    pub aud: Option<String>,
}

/// The authenticated identity for a single request.
///
/// Produced fresh per request by token verification; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Normalized wallet address — the ownership key.
    pub wallet: WalletAddress,
    /// Positive numeric identity id.
    pub fid: i64,
}

impl AuthContext {
    /// Normalize verified claims into an [`AuthContext`].
    ///
    /// # Errors
    /// - [`AuthError::InvalidAudience`] if `aud` is absent or differs from
    ///   the configured domain
    /// - [`AuthError::InvalidClaims`] if neither `fid` nor `sub` resolves to
    ///   a positive integer, or the wallet is absent/invalid after
    ///   normalization
    pub fn from_claims(claims: &VerifiedClaims, domain: &str) -> Result<Self, AuthError> {
        match claims.aud.as_deref() {
            Some(aud) if aud == domain => {}
            _ => return Err(AuthError::InvalidAudience),
        }

        let fid = resolve_fid(claims).ok_or(AuthError::InvalidClaims)?;

        let raw_wallet = claims
            .wallet_address
            .as_deref()
            .or(claims.address.as_deref())
            .unwrap_or_default();
        let wallet = normalize_wallet(raw_wallet);
        if !is_valid_wallet(&wallet) {
            return Err(AuthError::InvalidClaims);
        }

        Ok(AuthContext {
            wallet: WalletAddress::normalized(&wallet),
            fid,
        })
    }
}

/// Resolve the identity id: explicit `fid` first, then `sub` as a number or
/// a numeric string. Must be a positive integer.
fn resolve_fid(claims: &VerifiedClaims) -> Option<i64> {
    let candidate = match claims.fid {
        Some(fid) => Some(fid),
        None => match claims.sub.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        },
    };

    candidate.filter(|fid| *fid > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_claims() -> VerifiedClaims {
        VerifiedClaims {
            sub: None,
            fid: Some(42),
            wallet_address: Some(" 0xABC ".to_string()),
            address: None,
            aud: Some("example.com".to_string()),
        }
    }

    #[test]
    fn from_claims_normalizes_wallet_and_keeps_fid() {
        let ctx = AuthContext::from_claims(&sample_claims(), "example.com").unwrap();
        assert_eq!(ctx.wallet.as_str(), "0xabc");
        assert_eq!(ctx.fid, 42);
    }

    #[test]
    fn audience_mismatch_is_rejected() {
        let mut claims = sample_claims();
        claims.aud = Some("other.example".to_string());
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidAudience)
        );
    }

    #[test]
    fn absent_audience_is_rejected() {
        let mut claims = sample_claims();
        claims.aud = None;
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidAudience)
        );
    }

    #[test]
    fn fid_falls_back_to_numeric_sub() {
        let mut claims = sample_claims();
        claims.fid = None;
        claims.sub = Some(json!(7));
        let ctx = AuthContext::from_claims(&claims, "example.com").unwrap();
        assert_eq!(ctx.fid, 7);

        claims.sub = Some(json!("19"));
        let ctx = AuthContext::from_claims(&claims, "example.com").unwrap();
        assert_eq!(ctx.fid, 19);
    }

    #[test]
    fn explicit_fid_wins_over_sub() {
        let mut claims = sample_claims();
        claims.sub = Some(json!(999));
        let ctx = AuthContext::from_claims(&claims, "example.com").unwrap();
        assert_eq!(ctx.fid, 42);
    }

    #[test]
    fn non_positive_or_unparsable_fid_is_rejected() {
        let mut claims = sample_claims();
        claims.fid = Some(0);
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidClaims)
        );

        claims.fid = Some(-3);
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidClaims)
        );

        claims.fid = None;
        claims.sub = Some(json!("not-a-number"));
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidClaims)
        );

        claims.sub = None;
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidClaims)
        );
    }

    #[test]
    fn wallet_falls_back_to_address_field() {
        let mut claims = sample_claims();
        claims.wallet_address = None;
        claims.address = Some("0xDEF".to_string());
        let ctx = AuthContext::from_claims(&claims, "example.com").unwrap();
        assert_eq!(ctx.wallet.as_str(), "0xdef");
    }

    #[test]
    fn missing_or_blank_wallet_is_rejected() {
        let mut claims = sample_claims();
        claims.wallet_address = None;
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidClaims)
        );

        claims.wallet_address = Some("   ".to_string());
        assert_eq!(
            AuthContext::from_claims(&claims, "example.com"),
            Err(AuthError::InvalidClaims)
        );
    }

    #[test]
    fn claims_deserialize_from_provider_json() {
        let claims: VerifiedClaims = serde_json::from_value(json!({
            "fid": 42,
            "wallet_address": " 0xABC ",
            "aud": "example.com",
            "iat": 1700000000
        }))
        .unwrap();
        let ctx = AuthContext::from_claims(&claims, "example.com").unwrap();
        assert_eq!(ctx, AuthContext {
            wallet: WalletAddress::normalized("0xabc"),
            fid: 42,
        });
    }
}
