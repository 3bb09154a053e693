use actix_web::web;

use crate::handlers::workers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/workers")
            .route("", web::get().to(workers::list_workers))
            .route("/{id}", web::get().to(workers::get_worker)),
    );
}
