//! Server construction and route wiring.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::ApiDoc;
use crate::domain::ports::UserStore;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{
    delete_user, get_id_by_username, get_user_by_credentials, get_user_by_id, insert_user,
    list_users,
};

/// Assemble the application with all routes registered.
///
/// Shared by the binary and the integration tests so both exercise the same
/// wiring.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .service(list_users)
        .service(get_user_by_id)
        .service(get_user_by_credentials)
        .service(get_id_by_username)
        .service(insert_user)
        .service(delete_user);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns the bind or accept-loop error from the underlying server.
pub async fn run(config: AppConfig, store: Arc<dyn UserStore>) -> std::io::Result<()> {
    let state = web::Data::new(HttpState::new(store));

    HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run()
        .await
}
