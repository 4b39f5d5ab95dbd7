//! User CRUD endpoint handlers.
//!
//! ```text
//! GET    /users                   -> UsersEnvelope
//! GET    /user/id                 -> UserEnvelope
//! GET    /user/username_password  -> UserEnvelope
//! GET    /id/username             -> IdEnvelope
//! POST   /user                    -> AckEnvelope
//! DELETE /user                    -> RowsEnvelope
//! ```
//!
//! The read endpoints take their parameters as JSON request bodies (not
//! query strings), mirroring the wire contract of the service's existing
//! clients.

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{
    EmptyRequest, IdRequest, UsernamePasswordEmailRequest, UsernamePasswordRequest,
    UsernameRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::codec;
use crate::inbound::http::state::HttpState;

/// List every user record.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Listing or failure envelope", body = crate::domain::UsersEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let EmptyRequest = codec::decode_empty();
    codec::encode_response(&state.users.list_users().await)
}

/// Fetch a user record by id.
#[utoipa::path(
    get,
    path = "/user/id",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Record (zero-valued when absent) or failure envelope", body = crate::domain::UserEnvelope),
        (status = 400, description = "Undecodable request body")
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/user/id")]
pub async fn get_user_by_id(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = codec::decode_request::<IdRequest>(&body)?;
    codec::encode_response(&state.users.get_user_by_id(request).await)
}

/// Fetch a user record by login name and password.
#[utoipa::path(
    get,
    path = "/user/username_password",
    request_body = UsernamePasswordRequest,
    responses(
        (status = 200, description = "Record (zero-valued on credential mismatch) or failure envelope", body = crate::domain::UserEnvelope),
        (status = 400, description = "Undecodable request body")
    ),
    tags = ["users"],
    operation_id = "getUserByUsernameAndPassword"
)]
#[get("/user/username_password")]
pub async fn get_user_by_credentials(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = codec::decode_request::<UsernamePasswordRequest>(&body)?;
    codec::encode_response(&state.users.get_user_by_credentials(request).await)
}

/// Fetch the id for a login name.
#[utoipa::path(
    get,
    path = "/id/username",
    request_body = UsernameRequest,
    responses(
        (status = 200, description = "Identifier (zero when absent) or failure envelope", body = crate::domain::IdEnvelope),
        (status = 400, description = "Undecodable request body")
    ),
    tags = ["users"],
    operation_id = "getIdByUsername"
)]
#[get("/id/username")]
pub async fn get_id_by_username(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = codec::decode_request::<UsernameRequest>(&body)?;
    codec::encode_response(&state.users.get_id_by_username(request).await)
}

/// Insert a new user record.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UsernamePasswordEmailRequest,
    responses(
        (status = 200, description = "Acknowledgement or failure envelope", body = crate::domain::AckEnvelope),
        (status = 400, description = "Undecodable request body")
    ),
    tags = ["users"],
    operation_id = "insertUser"
)]
#[post("/user")]
pub async fn insert_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request = codec::decode_request::<UsernamePasswordEmailRequest>(&body)?;
    codec::encode_response(&state.users.insert_user(request).await)
}

/// Delete a user record by id.
#[utoipa::path(
    delete,
    path = "/user",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Affected-row count or failure envelope", body = crate::domain::RowsEnvelope),
        (status = 400, description = "Undecodable request body")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user")]
pub async fn delete_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request = codec::decode_request::<IdRequest>(&body)?;
    codec::encode_response(&state.users.delete_user(request).await)
}
