use actix_web::web;

use crate::handlers::assignments;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .route("", web::get().to(assignments::day_roster))
            .route("", web::post().to(assignments::create_assignment))
            .route("/options", web::get().to(assignments::form_options))
            .route("/{id}", web::get().to(assignments::get_assignment))
            .route("/{id}", web::put().to(assignments::update_assignment))
            .route(
                "/{id}/status",
                web::put().to(assignments::update_assignment_status),
            )
            .route("/{id}", web::delete().to(assignments::delete_assignment)),
    );
}
