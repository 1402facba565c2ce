// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity normalization primitives.
//!
//! The normalized wallet address is the sole ownership key throughout the
//! service: two addresses identify the same owner iff their normalized forms
//! are byte-equal. Slugs are *not* normalized; they must already be in
//! canonical form when they reach the API.

/// Pluggable wallet format validator.
///
/// The default validation only requires a non-empty normalized form.
/// Deployments that want checksum or chain-specific format checks can layer
/// a stricter predicate on top without touching call sites.
pub type WalletValidator = fn(&str) -> bool;

/// Slug length bounds (inclusive).
const SLUG_MIN_LEN: usize = 3;
const SLUG_MAX_LEN: usize = 48;

/// Normalize a raw wallet address: trim surrounding whitespace, lowercase.
///
/// Total function; empty input yields an empty string. Idempotent:
/// normalizing a normalized wallet is a no-op.
pub fn normalize_wallet(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a wallet value is acceptable as an ownership key.
///
/// True iff the value is non-empty after normalization.
pub fn is_valid_wallet(value: &str) -> bool {
    !normalize_wallet(value).is_empty()
}

/// Whether a raw slug matches `^[a-z0-9-]{3,48}$`.
///
/// No normalization is applied: case and content matter exactly as given.
pub fn is_valid_slug(value: &str) -> bool {
    let len = value.len();
    if !(SLUG_MIN_LEN..=SLUG_MAX_LEN).contains(&len) {
        return false;
    }
    value
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_wallet(" 0xABC "), "0xabc");
        assert_eq!(normalize_wallet("\t0xDeAdBeEf\n"), "0xdeadbeef");
        assert_eq!(normalize_wallet(""), "");
        assert_eq!(normalize_wallet("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [" 0xABC ", "0xabc", "  MiXeD-Case  ", ""] {
            let once = normalize_wallet(raw);
            assert_eq!(normalize_wallet(&once), once);
        }
    }

    #[test]
    fn wallet_validity_requires_non_empty_normalized_form() {
        assert!(is_valid_wallet("0xabc"));
        assert!(is_valid_wallet(" 0xABC "));
        assert!(!is_valid_wallet(""));
        assert!(!is_valid_wallet("   "));
    }

    #[test]
    fn slug_accepts_canonical_forms() {
        assert!(is_valid_slug("my-project"));
        assert!(is_valid_slug("abc"));
        assert!(is_valid_slug("a1-b2-c3"));
        assert!(is_valid_slug(&"a".repeat(48)));
    }

    #[test]
    fn slug_rejects_bad_length() {
        assert!(!is_valid_slug("ok"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug(&"a".repeat(49)));
    }

    #[test]
    fn slug_rejects_bad_characters() {
        assert!(!is_valid_slug("AB-cd"));
        assert!(!is_valid_slug("has space"));
        assert!(!is_valid_slug("under_score"));
        assert!(!is_valid_slug("émoji-slug"));
        assert!(!is_valid_slug("dot.dot"));
    }

    #[test]
    fn stricter_validator_can_be_plugged_in() {
        let eth_like: WalletValidator = |value| {
            let normalized = normalize_wallet(value);
            normalized.starts_with("0x") && normalized.len() == 42
        };

        assert!(eth_like(&format!("0x{}", "a".repeat(40))));
        assert!(!eth_like("0xabc"));
    }
}
