use utoipa::OpenApi;

pub const FILM_TAG: &str = "Films";
pub const USER_TAG: &str = "Users";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinelist",
        description = "An in-memory film and user catalog API",
    ),
    paths(
        crate::api::handlers::films::list_films,
        crate::api::handlers::films::create_film,
        crate::api::handlers::films::update_film,
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = FILM_TAG, description = "Film catalog endpoints"),
        (name = USER_TAG, description = "User catalog endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
