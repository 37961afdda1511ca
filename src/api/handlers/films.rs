//! Film catalog request handlers.

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
};

use crate::api::doc::FILM_TAG;
use crate::api::dto::{ErrorResponse, FilmPayload, FilmResponse};
use crate::api::middleware::{RequestId, error_to_response_with_request_id};
use crate::state::AppState;

/// Creates film-related routes.
///
/// Routes:
/// - GET /   - List all films
/// - POST /  - Create a new film
/// - PUT /   - Update the film whose id is carried in the body
pub fn film_routes() -> Router<AppState> {
    Router::new().route("/", get(list_films).post(create_film).put(update_film))
}

/// GET /films - List all films
///
/// Returns a JSON array of all films, in no guaranteed order.
#[utoipa::path(
    get,
    path = "/films",
    responses(
        (status = 200, description = "All stored films", body = [FilmResponse])
    ),
    tag = FILM_TAG
)]
pub async fn list_films(State(state): State<AppState>) -> Json<Vec<FilmResponse>> {
    let films = state.stores.films.list_all();
    Json(films.into_iter().map(FilmResponse::from).collect())
}

/// POST /films - Create a new film
///
/// Validates the film and assigns the next id.
/// Returns 201 Created with the stored film data.
#[utoipa::path(
    post,
    path = "/films",
    request_body = FilmPayload,
    responses(
        (status = 201, description = "Film created", body = FilmResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = FILM_TAG
)]
pub async fn create_film(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(payload): Json<FilmPayload>,
) -> Result<(StatusCode, Json<FilmResponse>), Response> {
    let film = state
        .stores
        .films
        .create(payload.into_film())
        .map_err(|e| error_to_response_with_request_id(e, request_id.map(|Extension(RequestId(id))| id)))?;
    Ok((StatusCode::CREATED, Json(FilmResponse::from(film))))
}

/// PUT /films - Update a film
///
/// Replaces the stored film at the id carried in the body.
/// Returns the updated film data.
#[utoipa::path(
    put,
    path = "/films",
    request_body = FilmPayload,
    responses(
        (status = 200, description = "Film updated", body = FilmResponse),
        (status = 400, description = "Missing or unknown id, or validation failed", body = ErrorResponse)
    ),
    tag = FILM_TAG
)]
pub async fn update_film(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(payload): Json<FilmPayload>,
) -> Result<Json<FilmResponse>, Response> {
    let film = state
        .stores
        .films
        .update(payload.into_film())
        .map_err(|e| error_to_response_with_request_id(e, request_id.map(|Extension(RequestId(id))| id)))?;
    Ok(Json(FilmResponse::from(film)))
}
