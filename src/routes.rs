use actix_web::web;

use crate::errors;
use crate::handlers;

/// Registers both resource collections plus the extractor error handlers that
/// route bad JSON bodies and bad path ids through [`errors::AppError`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
        .service(
            web::resource("/api/employees")
                .route(web::get().to(handlers::employee::get_employees))
                .route(web::post().to(handlers::employee::create_employee)),
        )
        .service(
            web::resource("/api/employees/{id}")
                .route(web::put().to(handlers::employee::update_employee))
                .route(web::delete().to(handlers::employee::delete_employee)),
        )
        .service(
            web::resource("/api/departments")
                .route(web::get().to(handlers::department::get_departments))
                .route(web::post().to(handlers::department::create_department)),
        )
        .service(
            web::resource("/api/departments/{id}")
                .route(web::put().to(handlers::department::update_department))
                .route(web::delete().to(handlers::department::delete_department)),
        );
}
