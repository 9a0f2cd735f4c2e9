//! HTTP handlers and route configuration.

mod comments;
mod health;
mod likes;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/comments")
                    .route("", web::get().to(comments::list))
                    .route("", web::post().to(comments::create))
                    .route("/post/{post_id}", web::get().to(comments::list_by_post))
                    .route("/{id}", web::get().to(comments::get))
                    .route("/{id}", web::put().to(comments::update))
                    .route("/{id}", web::delete().to(comments::delete)),
            )
            .service(
                web::scope("/likes")
                    .route("", web::post().to(likes::like))
                    .route("/post/{post_id}", web::get().to(likes::list_by_post))
                    .route("/post/{post_id}", web::delete().to(likes::unlike))
                    .route("/post/{post_id}/count", web::get().to(likes::count)),
            ),
    );
}
