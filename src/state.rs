// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::storage::ProjectStore;

/// Shared application state.
///
/// Holds only immutable per-process configuration and `Arc`ed collaborators;
/// there is no shared mutable state across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub verifier: Arc<dyn TokenVerifier>,
    /// Expected token audience/domain, validated present at startup.
    pub auth_domain: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        verifier: Arc<dyn TokenVerifier>,
        auth_domain: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            store,
            verifier,
            auth_domain: auth_domain.into(),
        }
    }
}
