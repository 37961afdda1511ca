//! User catalog request handlers.

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
};

use crate::api::doc::USER_TAG;
use crate::api::dto::{ErrorResponse, UserPayload, UserResponse};
use crate::api::middleware::{RequestId, error_to_response_with_request_id};
use crate::state::AppState;

/// Creates user-related routes.
///
/// Routes:
/// - GET /   - List all users
/// - POST /  - Create a new user
/// - PUT /   - Update the user whose id is carried in the body
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user).put(update_user))
}

/// GET /users - List all users
///
/// Returns a JSON array of all users, in no guaranteed order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All stored users", body = [UserResponse])
    ),
    tag = USER_TAG
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state.stores.users.list_all();
    Json(users.into_iter().map(UserResponse::from).collect())
}

/// POST /users - Create a new user
///
/// Validates the user (substituting the login for a blank name) and assigns
/// the next id. Returns 201 Created with the stored user data.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn create_user(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), Response> {
    let user = state
        .stores
        .users
        .create(payload.into_user())
        .map_err(|e| error_to_response_with_request_id(e, request_id.map(|Extension(RequestId(id))| id)))?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users - Update a user
///
/// Replaces the stored user at the id carried in the body.
/// Returns the updated user data.
#[utoipa::path(
    put,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Missing or unknown id, or validation failed", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn update_user(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, Response> {
    let user = state
        .stores
        .users
        .update(payload.into_user())
        .map_err(|e| error_to_response_with_request_id(e, request_id.map(|Extension(RequestId(id))| id)))?;
    Ok(Json(UserResponse::from(user)))
}
