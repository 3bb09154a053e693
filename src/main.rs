use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use teko_board::database::{
    init_database,
    repositories::{AssignmentRepository, ProjectRepository, StatsRepository, WorkerRepository},
};
use teko_board::middleware::RequestId;
use teko_board::{Config, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("TEKO-BOARD API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting TEKO-BOARD API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url, config.acquire_timeout()).await?;
    println!("✅ Database initialized");

    // Initialize repositories
    let assignment_repo = web::Data::new(AssignmentRepository::new(pool.clone()));
    let worker_repo = web::Data::new(WorkerRepository::new(pool.clone()));
    let project_repo = web::Data::new(ProjectRepository::new(pool.clone()));
    let stats_repo = web::Data::new(StatsRepository::new(pool.clone()));
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    let client_origin = config.client_origin.clone();

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(assignment_repo.clone())
            .app_data(worker_repo.clone())
            .app_data(project_repo.clone())
            .app_data(stats_repo.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&client_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
