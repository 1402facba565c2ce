// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Postgres-backed project store.
//!
//! Expected schema:
//!
//! ```text
//! users    (wallet_address TEXT PRIMARY KEY, created_at TIMESTAMPTZ DEFAULT now())
//! projects (id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!           owner_wallet TEXT NOT NULL REFERENCES users (wallet_address),
//!           name TEXT NOT NULL,
//!           project_slug TEXT NOT NULL,
//!           plan_id TEXT NOT NULL,
//!           status TEXT NOT NULL DEFAULT 'draft',
//!           config_json JSONB NOT NULL DEFAULT '{}',
//!           created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
//!           updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
//!           UNIQUE (owner_wallet, project_slug))
//! ```
//!
//! Slug uniqueness lives in the unique index; a violation surfaces as
//! [`StoreError::Conflict`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::store::{NewProject, ProjectPatch, ProjectStore};
use super::StoreError;
use crate::models::{PlanId, Project, ProjectStatus, WalletAddress};

const PROJECT_COLUMNS: &str =
    "id, owner_wallet, name, project_slug, plan_id, status, config_json, created_at, updated_at";

/// Row shape of the `projects` table.
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    owner_wallet: String,
    name: String,
    project_slug: String,
    plan_id: String,
    status: String,
    config_json: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_project(self) -> Result<Project, StoreError> {
        let plan_id = PlanId::parse(&self.plan_id)
            .ok_or_else(|| StoreError::Database(format!("unknown plan_id: {}", self.plan_id)))?;
        let status = ProjectStatus::parse(&self.status)
            .ok_or_else(|| StoreError::Database(format!("unknown status: {}", self.status)))?;

        Ok(Project {
            id: self.id,
            owner_wallet: WalletAddress::normalized(&self.owner_wallet),
            name: self.name,
            project_slug: self.project_slug,
            plan_id,
            status,
            config_json: self.config_json,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Production project store backed by a Postgres pool.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotent identity upsert keyed by wallet address.
    async fn upsert_identity(&self, wallet: &WalletAddress) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (wallet_address)
            VALUES ($1)
            ON CONFLICT (wallet_address) DO NOTHING
            "#,
        )
        .bind(wallet.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create_project(&self, new: NewProject) -> Result<Project, StoreError> {
        // Two calls by design: the upsert is idempotent, so a failure between
        // them leaves only an identity row the next create reuses.
        self.upsert_identity(&new.owner_wallet).await?;

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            INSERT INTO projects (owner_wallet, name, project_slug, plan_id, status, config_json)
            VALUES ($1, $2, $3, $4, 'draft', '{{}}')
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(new.owner_wallet.as_str())
        .bind(&new.name)
        .bind(&new.project_slug)
        .bind(new.plan_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_project()
    }

    async fn list_projects(
        &self,
        owner_wallet: &WalletAddress,
    ) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE owner_wallet = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(owner_wallet.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProjectRow::into_project).collect()
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        owner_wallet: &WalletAddress,
        patch: ProjectPatch,
    ) -> Result<Project, StoreError> {
        // Ownership and existence collapse into the WHERE clause.
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            UPDATE projects
            SET
                name = COALESCE($3, name),
                config_json = COALESCE($4, config_json),
                updated_at = now()
            WHERE id = $1 AND owner_wallet = $2
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project_id)
        .bind(owner_wallet.as_str())
        .bind(patch.name)
        .bind(patch.config_json)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        row.into_project()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
