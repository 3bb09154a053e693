use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::database::models::{ProjectAssignment, ProjectWithClient};
use crate::database::repositories::{AssignmentRepository, ProjectRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

/// Site detail with its placement roster.
#[derive(Debug, Serialize)]
pub struct SiteDetail {
    pub project: ProjectWithClient,
    pub assignments: Vec<ProjectAssignment>,
}

pub async fn list_projects(repo: web::Data<ProjectRepository>) -> Result<HttpResponse, AppError> {
    let projects = repo.list_assignable().await?;

    Ok(ApiResponse::ok(projects))
}

pub async fn get_project(
    path: web::Path<String>,
    project_repo: web::Data<ProjectRepository>,
    assignment_repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let project = project_repo
        .find_with_client(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let assignments = assignment_repo.list_by_project(&id).await?;

    Ok(ApiResponse::ok(SiteDetail {
        project,
        assignments,
    }))
}
