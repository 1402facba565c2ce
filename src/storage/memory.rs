// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory project store for tests and local development.
//!
//! Mirrors the Postgres backend's observable semantics: idempotent identity
//! upsert, per-owner slug uniqueness, newest-first listing, and the
//! ownership/existence collapse on update.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::store::{NewProject, ProjectPatch, ProjectStore};
use super::StoreError;
use crate::models::{Project, ProjectStatus, WalletAddress};

#[derive(Default)]
struct Inner {
    identities: HashSet<String>,
    // Insertion order doubles as creation order; listing reverses it so
    // equal timestamps still come back newest-first.
    projects: Vec<Project>,
}

/// Non-persistent [`ProjectStore`] implementation.
#[derive(Default)]
pub struct InMemoryProjectStore {
    inner: Mutex<Inner>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identity records, for assertions in tests.
    pub fn identity_count(&self) -> usize {
        self.inner.lock().expect("store lock").identities.len()
    }

    /// Total number of projects across all owners, for assertions in tests.
    pub fn project_count(&self) -> usize {
        self.inner.lock().expect("store lock").projects.len()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create_project(&self, new: NewProject) -> Result<Project, StoreError> {
        let mut inner = self.inner.lock().expect("store lock");

        inner.identities.insert(new.owner_wallet.as_str().to_string());

        let duplicate = inner.projects.iter().any(|p| {
            p.owner_wallet == new.owner_wallet && p.project_slug == new.project_slug
        });
        if duplicate {
            return Err(StoreError::Conflict(format!(
                "duplicate slug: {}",
                new.project_slug
            )));
        }

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            owner_wallet: new.owner_wallet,
            name: new.name,
            project_slug: new.project_slug,
            plan_id: new.plan_id,
            status: ProjectStatus::Draft,
            config_json: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        };
        inner.projects.push(project.clone());
        Ok(project)
    }

    async fn list_projects(
        &self,
        owner_wallet: &WalletAddress,
    ) -> Result<Vec<Project>, StoreError> {
        let inner = self.inner.lock().expect("store lock");
        Ok(inner
            .projects
            .iter()
            .rev()
            .filter(|p| &p.owner_wallet == owner_wallet)
            .cloned()
            .collect())
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        owner_wallet: &WalletAddress,
        patch: ProjectPatch,
    ) -> Result<Project, StoreError> {
        let mut inner = self.inner.lock().expect("store lock");

        let project = inner
            .projects
            .iter_mut()
            .find(|p| p.id == project_id && &p.owner_wallet == owner_wallet)
            .ok_or(StoreError::NotFound)?;

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(config_json) = patch.config_json {
            project.config_json = config_json;
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
