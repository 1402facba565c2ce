// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Wallet Address Type
//!
//! The [`WalletAddress`] newtype wraps a *normalized* wallet address
//! (trimmed, lowercased). Construct it via [`WalletAddress::normalized`] so
//! ownership comparisons are always exact string equality on canonical forms.
//!
//! ## Model Categories
//!
//! - **Projects**: Owner-scoped project resources with a draft/publish lifecycle
//! - **Requests**: Create/list/update payloads accepted by the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::identity::normalize_wallet;

// =============================================================================
// Wallet Address Type
// =============================================================================

/// Normalized wallet address wrapper.
///
/// Provides type safety for wallet addresses throughout the API. The value
/// is the sole ownership key; equality is exact equality of normalized forms.
///
/// # Example
///
/// ```rust,ignore
/// let addr = WalletAddress::normalized(" 0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12 ");
/// assert_eq!(addr.as_str(), "0x742d35cc6634c0532925a3b844bc9e7595f4ab12");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Normalize a raw address and wrap it.
    pub fn normalized(raw: &str) -> Self {
        WalletAddress(normalize_wallet(raw))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the address is empty after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

// =============================================================================
// Project Models
// =============================================================================

/// Subscription plan chosen at project creation. Immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Basic,
    Pro,
}

impl PlanId {
    /// Parse the wire form (`basic` / `pro`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(PlanId::Basic),
            "pro" => Some(PlanId::Pro),
            _ => None,
        }
    }

    /// The wire/store string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Basic => "basic",
            PlanId::Pro => "pro",
        }
    }
}

/// Project lifecycle status.
///
/// Projects are always created in `draft`. The only transition is
/// `draft -> published`, performed by an external publishing flow; ownership
/// checks apply uniformly regardless of status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Published,
}

impl ProjectStatus {
    /// Parse the wire form (`draft` / `published`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(ProjectStatus::Draft),
            "published" => Some(ProjectStatus::Published),
            _ => None,
        }
    }

    /// The wire/store string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
        }
    }
}

/// A project resource owned by exactly one wallet.
///
/// `project_slug`, `plan_id`, and `owner_wallet` are fixed at creation;
/// `name` and `config_json` are mutable through the update endpoint;
/// timestamps are store-managed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Project {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Normalized wallet address of the owner. Ownership never transfers.
    pub owner_wallet: WalletAddress,
    /// Human-readable project name.
    pub name: String,
    /// URL-safe slug, immutable once created. Matches `^[a-z0-9-]{3,48}$`.
    pub project_slug: String,
    /// Plan fixed at creation.
    pub plan_id: PlanId,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Opaque project configuration.
    pub config_json: serde_json::Value,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new project.
///
/// `wallet` is the caller-declared owner and must agree with the
/// token-derived identity; `plan_id` is accepted as a raw string so that an
/// unknown plan is rejected as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    /// Caller-declared owner wallet (checked against the bearer identity).
    pub wallet: Option<String>,
    /// Project name.
    pub name: Option<String>,
    /// Desired slug.
    pub project_slug: Option<String>,
    /// Plan identifier (`basic` or `pro`).
    pub plan_id: Option<String>,
}

/// Request to update a project's mutable fields.
///
/// Unknown fields are rejected: the slug, plan, and owner are immutable and
/// an attempt to patch them must fail loudly rather than be silently dropped.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectRequest {
    /// New project name.
    pub name: Option<String>,
    /// Replacement configuration object.
    pub config_json: Option<serde_json::Value>,
}

/// Query parameters for listing projects.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectsQuery {
    /// Caller-declared owner wallet (checked against the bearer identity).
    pub wallet: Option<String>,
}
