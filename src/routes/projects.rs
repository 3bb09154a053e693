use actix_web::web;

use crate::handlers::projects;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::list_projects))
            .route("/{id}", web::get().to(projects::get_project)),
    );
}
