//! User resource HTTP handlers.
//!
//! ```text
//! GET    /api/v1/users
//! POST   /api/v1/users            {"name":"Ada","email":"ada@example.com","age":36}
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}       {"age":37}
//! DELETE /api/v1/users/{id}
//! GET    /api/v1/users/{id}/image
//! PUT    /api/v1/users/{id}/image (raw body, Content-Type recorded)
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, http::header, post, put, web};
use uuid::Uuid;

use crate::domain::{Error, NewUser, User, UserId, UserUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

const OCTET_STREAM: &str = "application/octet-stream";

/// List all users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All known users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list().await?))
}

/// Create a user; the response is the stored entity with its assigned id.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Malformed payload", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(path.into_inner());
    Ok(web::Json(state.users.get(&id).await?))
}

/// Update a user; fields absent from the payload are left unchanged.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "The updated user", body = User),
        (status = 400, description = "Malformed payload", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UserUpdate>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(path.into_inner());
    Ok(web::Json(
        state.users.update(&id, payload.into_inner()).await?,
    ))
}

/// Delete a user; the response is the remaining collection.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Remaining users", body = [User]),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Vec<User>>> {
    let id = UserId::from(path.into_inner());
    state.users.remove(&id).await?;
    Ok(web::Json(state.users.list().await?))
}

/// Serve the user's attached image with its recorded content type.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/image",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Image bytes", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "No such user, no attachment, or bytes missing", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserImage"
)]
#[get("/users/{id}/image")]
pub async fn get_user_image(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = UserId::from(path.into_inner());
    let download = state.users.fetch_image(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type(download.content_type)
        .body(download.bytes))
}

/// Attach (or replace) the user's image from the raw request body.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/image",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user with attachment metadata", body = User),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "uploadUserImage"
)]
#[put("/users/{id}/image")]
pub async fn upload_user_image(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    request: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(path.into_inner());
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(OCTET_STREAM)
        .to_owned();

    Ok(web::Json(
        state
            .users
            .attach_image(&id, content_type, body.to_vec())
            .await?,
    ))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
