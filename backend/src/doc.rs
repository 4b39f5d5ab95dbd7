//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the endpoint annotations and the shared schemas.
//! Swagger UI serves the generated document in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    AckEnvelope, IdEnvelope, IdRequest, RowsEnvelope, User, UserEnvelope,
    UsernamePasswordEmailRequest, UsernamePasswordRequest, UsernameRequest, UsersEnvelope,
};

/// OpenAPI document for the user CRUD API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User storage API",
        description = "CRUD operations on the users table. Business failures \
                       are reported inside response envelopes; only \
                       undecodable requests surface as HTTP errors."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user_by_id,
        crate::inbound::http::users::get_user_by_credentials,
        crate::inbound::http::users::get_id_by_username,
        crate::inbound::http::users::insert_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        User,
        IdRequest,
        UsernameRequest,
        UsernamePasswordRequest,
        UsernamePasswordEmailRequest,
        UsersEnvelope,
        UserEnvelope,
        IdEnvelope,
        RowsEnvelope,
        AckEnvelope,
    )),
    tags(
        (name = "users", description = "User record operations")
    )
)]
pub struct ApiDoc;
