//! HTTP handlers and route configuration.

mod assets;
mod health;
mod pages;
mod posts;

use actix_web::web;

use crate::middleware::error::{form_config, json_config};

pub use assets::serve_public;

/// Configure all application routes.
///
/// Unmatched paths are left to `serve_public`, which the app installs as its
/// default service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(form_config())
        // Page
        .service(
            web::resource("/")
                .route(web::get().to(pages::index))
                .route(web::head().to(pages::index)),
        )
        // Post API
        .service(web::resource("/posts").route(web::post().to(posts::create_post)))
        .service(
            web::resource("/posts/{id}")
                .route(web::patch().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        )
        // Operational routes
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::{
        App, Error,
        body::MessageBody,
        dev::{ServiceFactory, ServiceRequest, ServiceResponse},
        web,
    };

    use crate::state::AppState;

    /// The application as `main` assembles it, minus logging middleware.
    pub fn app(
        state: AppState,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .configure(super::configure_routes)
            .default_service(web::to(super::serve_public))
    }
}
