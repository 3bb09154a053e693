use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::Serialize;

use crate::database::models::{WorkerAssignment, WorkerProfile};
use crate::database::repositories::{AssignmentRepository, WorkerRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::roster;

/// Worker detail with the schedule history split around today.
#[derive(Debug, Serialize)]
pub struct WorkerDetail {
    pub worker: WorkerProfile,
    pub today: Vec<WorkerAssignment>,
    pub upcoming: Vec<WorkerAssignment>,
    pub past: Vec<WorkerAssignment>,
}

pub async fn list_workers(repo: web::Data<WorkerRepository>) -> Result<HttpResponse, AppError> {
    let workers = repo.list().await?;

    Ok(ApiResponse::ok(workers))
}

pub async fn get_worker(
    path: web::Path<String>,
    worker_repo: web::Data<WorkerRepository>,
    assignment_repo: web::Data<AssignmentRepository>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let worker = worker_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Worker not found".to_string()))?;

    let history = assignment_repo.list_by_worker(&id).await?;

    let today = Local::now().date_naive();
    let today_entries = roster::on_date(&history, today);
    let split = roster::partition(history, today);

    Ok(ApiResponse::ok(WorkerDetail {
        worker,
        today: today_entries,
        upcoming: split.upcoming,
        past: split.past,
    }))
}
