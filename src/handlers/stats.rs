use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::database::repositories::StatsRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn get_dashboard_stats(
    repo: web::Data<StatsRepository>,
) -> Result<HttpResponse, AppError> {
    let today = Local::now().date_naive();
    let stats = repo.dashboard(today).await?;

    Ok(ApiResponse::ok(stats))
}
