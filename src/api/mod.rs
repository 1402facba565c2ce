// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{CreateProjectRequest, PlanId, Project, ProjectStatus, UpdateProjectRequest, WalletAddress},
    state::AppState,
};

pub mod health;
pub mod projects;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/projects/{project_id}", patch(projects::update_project));

    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        projects::list_projects,
        projects::create_project,
        projects::update_project,
        health::health,
        health::ready
    ),
    components(
        schemas(
            Project,
            PlanId,
            ProjectStatus,
            WalletAddress,
            CreateProjectRequest,
            UpdateProjectRequest,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Projects", description = "Owner-scoped project management"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
