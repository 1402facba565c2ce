// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Project endpoints.
//!
//! Control flow is the same on every route: verify the bearer token, gate
//! the caller-declared wallet against the token identity, validate input,
//! then touch the store. Control never proceeds past a failed step.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::{authorize, Auth};
use crate::error::ApiError;
use crate::identity::is_valid_slug;
use crate::models::{
    CreateProjectRequest, PlanId, Project, ProjectsQuery, UpdateProjectRequest,
};
use crate::state::AppState;
use crate::storage::{NewProject, ProjectPatch};

#[utoipa::path(
    post,
    path = "/v1/projects",
    request_body = CreateProjectRequest,
    tag = "Projects",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Project created in draft status", body = Project),
        (status = 400, description = "Missing or malformed fields"),
        (status = 401, description = "Unauthorized or wallet mismatch"),
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    Auth(ctx): Auth,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let wallet = authorize(&ctx, request.wallet.as_deref().unwrap_or_default())?;

    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let slug = request
        .project_slug
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let plan = request.plan_id.as_deref();

    let (Some(name), Some(slug), Some(plan)) = (name, slug, plan) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    if !is_valid_slug(slug) {
        return Err(ApiError::bad_request("Invalid slug"));
    }

    let plan_id = PlanId::parse(plan).ok_or_else(|| ApiError::bad_request("Invalid plan"))?;

    let project = state
        .store
        .create_project(NewProject {
            owner_wallet: wallet,
            name: name.to_string(),
            project_slug: slug.to_string(),
            plan_id,
        })
        .await?;

    tracing::info!(project_id = %project.id, owner = %project.owner_wallet, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

#[utoipa::path(
    get,
    path = "/v1/projects",
    params(ProjectsQuery),
    tag = "Projects",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's projects, newest first", body = [Project]),
        (status = 401, description = "Unauthorized or wallet mismatch"),
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Auth(ctx): Auth,
    Query(params): Query<ProjectsQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let wallet = authorize(&ctx, params.wallet.as_deref().unwrap_or_default())?;

    let projects = state.store.list_projects(&wallet).await?;
    Ok(Json(projects))
}

#[utoipa::path(
    patch,
    path = "/v1/projects/{project_id}",
    params(
        ("project_id" = Uuid, Path, description = "Identifier of the project to update")
    ),
    request_body = UpdateProjectRequest,
    tag = "Projects",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Project absent or owned by someone else"),
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Auth(ctx): Auth,
    Path(project_id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    // No caller-declared wallet here: the owner scope is the token identity.
    let patch = ProjectPatch {
        name: request
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
        config_json: request.config_json,
    };

    let project = state
        .store
        .update_project(project_id, &ctx.wallet, patch)
        .await?;

    Ok(Json(project))
}
