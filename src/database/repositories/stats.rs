use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::models::DashboardStats;

pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Landing-page counters. The three counts are independent reads, so
    /// they are issued concurrently.
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardStats, sqlx::Error> {
        let (today_assignments, active_workers, active_projects) = tokio::try_join!(
            self.count_assignments_on(today),
            self.count_active_workers(),
            self.count_assignable_projects(),
        )?;

        Ok(DashboardStats {
            today_assignments,
            active_workers,
            active_projects,
        })
    }

    async fn count_assignments_on(&self, date: NaiveDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM assignments WHERE date = ?")
            .bind(date)
            .fetch_one(&self.pool)
            .await
    }

    async fn count_active_workers(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM workers WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await
    }

    async fn count_assignable_projects(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects WHERE status IN ('contracted', 'in_progress')",
        )
        .fetch_one(&self.pool)
        .await
    }
}
