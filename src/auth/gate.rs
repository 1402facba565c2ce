// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet-mismatch authorization gate.
//!
//! Every entry point that accepts a caller-declared wallet must run this
//! gate before touching the store. The declared wallet is never trusted
//! alone; it has to agree with the token-derived identity.

use super::claims::AuthContext;
use super::error::AuthError;
use crate::models::WalletAddress;

/// Check a caller-declared wallet against the authenticated identity.
///
/// The declared wallet is normalized first; comparison is exact string
/// equality on normalized forms. An empty declared wallet fails the same way
/// as a mismatched one.
///
/// On success returns the normalized wallet so handlers operate on the
/// canonical form.
pub fn authorize(auth: &AuthContext, requested_wallet: &str) -> Result<WalletAddress, AuthError> {
    let requested = WalletAddress::normalized(requested_wallet);
    if requested.is_empty() || requested != auth.wallet {
        return Err(AuthError::WalletMismatch);
    }
    Ok(requested)
}
