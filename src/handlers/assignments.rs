use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::database::models::{AssignmentStatus, DayAssignment, Project, WorkerProfile};
use crate::database::repositories::{AssignmentRepository, ProjectRepository, WorkerRepository};
use crate::error::AppError;
use crate::forms::AssignmentForm;
use crate::handlers::shared::ApiResponse;
use crate::roster;

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

/// One day's roster plus the navigation scaffolding around it.
#[derive(Debug, Serialize)]
pub struct DayRoster {
    pub date: NaiveDate,
    pub label: String,
    pub is_today: bool,
    pub prev_date: NaiveDate,
    pub next_date: NaiveDate,
    pub assignments: Vec<DayAssignment>,
}

/// Select options for the assignment form.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub workers: Vec<WorkerProfile>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AssignmentStatus,
}

fn parse_day_query(query: DayQuery, today: NaiveDate) -> Result<NaiveDate, AppError> {
    match query.date.as_deref() {
        None | Some("") => Ok(today),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("Invalid date parameter: {}", raw))),
    }
}

pub async fn day_roster(
    query: web::Query<DayQuery>,
    repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let today = Local::now().date_naive();
    let date = parse_day_query(query.into_inner(), today)?;

    let assignments = repo.list_by_date(date).await?;
    let (prev_date, next_date) = roster::adjacent_dates(date);

    Ok(ApiResponse::ok(DayRoster {
        date,
        label: roster::weekday_label(date),
        is_today: date == today,
        prev_date,
        next_date,
        assignments,
    }))
}

pub async fn create_assignment(
    form: web::Json<AssignmentForm>,
    repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let input = match form.into_inner().validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(HttpResponse::UnprocessableEntity()
                .json(ApiResponse::error_with_data(errors, "入力内容を確認してください")));
        }
    };

    let assignment = repo.create(input).await?;

    Ok(ApiResponse::created(assignment))
}

/// Workers and sites for the form selects. These are secondary reads: if
/// one of them fails the form still renders, just with an empty list.
pub async fn form_options(
    worker_repo: web::Data<WorkerRepository>,
    project_repo: web::Data<ProjectRepository>,
) -> Result<HttpResponse, AppError> {
    let (workers, projects) = tokio::join!(
        worker_repo.list_active(),
        project_repo.list_assignable()
    );

    let workers = workers.unwrap_or_else(|e| {
        log::error!("Failed to fetch workers for form: {}", e);
        Vec::new()
    });
    let projects = projects.unwrap_or_else(|e| {
        log::error!("Failed to fetch projects for form: {}", e);
        Vec::new()
    });

    Ok(ApiResponse::ok(FormOptions { workers, projects }))
}

pub async fn get_assignment(
    path: web::Path<String>,
    repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let assignment = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

    Ok(ApiResponse::ok(assignment))
}

pub async fn update_assignment(
    path: web::Path<String>,
    form: web::Json<AssignmentForm>,
    repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let input = match form.into_inner().validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(HttpResponse::UnprocessableEntity()
                .json(ApiResponse::error_with_data(errors, "入力内容を確認してください")));
        }
    };

    let assignment = repo
        .update(&id, input)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

    Ok(ApiResponse::ok(assignment))
}

/// One-click badge update. Deliberately accepts any status value for any
/// current status; the label set has no transition rules.
pub async fn update_assignment_status(
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
    repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let assignment = repo
        .update_status(&id, body.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

    Ok(ApiResponse::ok(assignment))
}

pub async fn delete_assignment(
    path: web::Path<String>,
    repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let deleted = repo.delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Assignment not found".to_string()));
    }

    Ok(ApiResponse::message("配置を削除しました"))
}
