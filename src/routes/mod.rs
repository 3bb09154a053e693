use actix_web::web;

pub mod assignments;
pub mod projects;
pub mod stats;
pub mod workers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(assignments::configure)
            .configure(workers::configure)
            .configure(projects::configure)
            .configure(stats::configure),
    );
}
