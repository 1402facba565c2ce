// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! This module provides Quick Auth bearer-token authentication for the
//! Relational Projects API.
//!
//! ## Auth Flow
//!
//! 1. Frontend (miniapp) obtains a Quick Auth token from the identity provider
//! 2. Frontend sends `Authorization: Bearer <token>`
//! 3. Server:
//!    - Delegates token verification to the provider's verify endpoint
//!      (one fresh round trip per request, no caching, no retry)
//!    - Checks the audience against the configured domain
//!    - Extracts and normalizes:
//!      - `fid` (falling back to `sub`) → positive numeric identity id
//!      - `wallet_address` (falling back to `address`) → normalized wallet
//!
//! ## Security
//!
//! - All project endpoints require authentication
//! - The caller-declared wallet is never trusted alone: [`authorize`]
//!   compares it against the token-derived identity before any store access
//! - Responses never reveal which verification sub-check failed; the precise
//!   cause is logged internally

pub mod claims;
pub mod error;
pub mod extractor;
pub mod gate;
pub mod verifier;

pub use claims::{AuthContext, VerifiedClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use gate::authorize;
pub use verifier::{QuickAuthVerifier, TokenVerifier};
