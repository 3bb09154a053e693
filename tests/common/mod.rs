#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use teko_board::database::init_database;
use teko_board::database::models::{AssignmentInput, AssignmentStatus};

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url, Duration::from_secs(5)).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Seed helpers: everything except assignments is owned by AGORA, so tests
// insert those rows directly.

pub async fn seed_user(pool: &SqlitePool, name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    sqlx::query(
        r#"
        INSERT INTO users (id, email, name, role, phone, is_active, created_at, updated_at)
        VALUES (?, ?, ?, 'member', ?, 1, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(format!("{}@example.com", &id[..8]))
    .bind(name)
    .bind("090-0000-0000")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert test user");

    id
}

pub async fn seed_partner(pool: &SqlitePool, name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    sqlx::query(
        r#"
        INSERT INTO partners (id, name, category, is_active, created_at, updated_at)
        VALUES (?, ?, '電気工事', 1, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert test partner");

    id
}

pub async fn seed_worker(
    pool: &SqlitePool,
    user_id: &str,
    partner_id: Option<&str>,
    display_name: Option<&str>,
) -> String {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();
    let worker_type = if partner_id.is_some() {
        "partner"
    } else {
        "internal"
    };

    sqlx::query(
        r#"
        INSERT INTO workers (id, user_id, partner_id, worker_type, display_name, skills, is_active, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, 1, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(partner_id)
    .bind(worker_type)
    .bind(display_name)
    .bind(r#"["サイン取付"]"#)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert test worker");

    id
}

pub async fn seed_client(pool: &SqlitePool, name: &str) -> String {
    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO clients (id, name, contact_name) VALUES (?, ?, '担当者')")
        .bind(&id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert test client");

    id
}

pub async fn seed_project(pool: &SqlitePool, name: &str, status: &str) -> String {
    seed_project_for_client(pool, name, status, None).await
}

pub async fn seed_project_for_client(
    pool: &SqlitePool,
    name: &str,
    status: &str,
    client_id: Option<&str>,
) -> String {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    sqlx::query(
        r#"
        INSERT INTO projects (id, project_code, name, client_id, type, status, address, created_at, updated_at)
        VALUES (?, ?, ?, ?, 'signage', ?, '東京都渋谷区1-2-3', ?, ?)
        "#,
    )
    .bind(&id)
    .bind(format!("P-{}", &id[..8]))
    .bind(name)
    .bind(client_id)
    .bind(status)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert test project");

    id
}

/// One internal worker and one in-progress project, the minimum a new
/// assignment needs to satisfy its foreign keys.
pub async fn seed_placement_targets(pool: &SqlitePool) -> (String, String) {
    let user_id = seed_user(pool, "山田太郎").await;
    let worker_id = seed_worker(pool, &user_id, None, Some("山田")).await;
    let project_id = seed_project(pool, "渋谷サイン改修", "in_progress").await;

    (worker_id, project_id)
}

pub fn assignment_input(worker_id: &str, project_id: &str, date: &str) -> AssignmentInput {
    AssignmentInput {
        worker_id: worker_id.to_string(),
        project_id: project_id.to_string(),
        date: date.parse().expect("test date must be YYYY-MM-DD"),
        start_time: None,
        end_time: None,
        status: AssignmentStatus::default(),
        notes: None,
        created_by: None,
    }
}
