// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The owner-scoped project store contract.

use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use crate::models::{PlanId, Project, WalletAddress};

/// Fields needed to create a project.
///
/// Validation (slug syntax, plan, non-empty name) happens before a
/// `NewProject` is built; the store only enforces its own constraints.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub owner_wallet: WalletAddress,
    pub name: String,
    pub project_slug: String,
    pub plan_id: PlanId,
}

/// Mutable-field patch for a project.
///
/// Only `name` and `config_json` exist here; slug, plan, and owner are
/// immutable post-creation and have no patch path at all.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub config_json: Option<serde_json::Value>,
}

/// Owner-scoped project persistence.
///
/// All operations take the owner's normalized wallet and never return
/// another owner's data.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Create a project for its owner.
    ///
    /// First ensures an identity record exists for the owner wallet
    /// (idempotent upsert), then inserts the project. The two store calls
    /// are not wrapped in one transaction; a failure between them leaves an
    /// identity record the next create reuses. New projects start in
    /// `draft` with an empty `config_json`.
    async fn create_project(&self, new: NewProject) -> Result<Project, StoreError>;

    /// List the owner's projects, newest-created first.
    async fn list_projects(&self, owner_wallet: &WalletAddress)
        -> Result<Vec<Project>, StoreError>;

    /// Patch a project's mutable fields.
    ///
    /// Fails with [`StoreError::NotFound`] when no project with
    /// `project_id` is owned by `owner_wallet` — existence and ownership
    /// are one check, so foreign projects don't leak their existence.
    async fn update_project(
        &self,
        project_id: Uuid,
        owner_wallet: &WalletAddress,
        patch: ProjectPatch,
    ) -> Result<Project, StoreError>;

    /// Connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
